//! Command-line construction for the Source Formatter jar
//!
//! The jar takes its configuration as `key=value` positional arguments.

use crate::domain::Options;
use std::ffi::OsString;
use std::path::Path;

pub const BASE_DIR_KEY: &str = "source.base.dir";
pub const OUTPUT_FILE_KEY: &str = "output.file.name";
pub const CHECK_NAMES_KEY: &str = "source.check.names";
pub const FILE_EXTENSIONS_KEY: &str = "source.file.extensions";
pub const SKIP_CHECK_NAMES_KEY: &str = "skip.check.names";
pub const INCLUDE_GENERATED_KEY: &str = "include.generated.files";
pub const INCLUDE_SUBREPOSITORIES_KEY: &str = "include.subrepositories";

/// Arguments passed to `java` to run `jar` with `options`
///
/// JVM arguments come first, then `-jar <jar>`, then the settings. List
/// settings are omitted when empty; boolean settings only when enabled.
pub fn checker_arguments(
    options: &Options,
    jar: &Path,
    output_file: &Path,
    jvm_args: &[String],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = jvm_args.iter().map(OsString::from).collect();

    args.push("-jar".into());
    args.push(jar.as_os_str().to_owned());
    args.push(path_setting(BASE_DIR_KEY, options.base_dir()));
    args.push(path_setting(OUTPUT_FILE_KEY, output_file));

    if !options.checks().is_empty() {
        args.push(list_setting(CHECK_NAMES_KEY, options.checks()));
    }
    if !options.filetypes().is_empty() {
        args.push(list_setting(FILE_EXTENSIONS_KEY, options.filetypes()));
    }
    if !options.skip_checks().is_empty() {
        args.push(list_setting(SKIP_CHECK_NAMES_KEY, options.skip_checks()));
    }
    if options.include_generated() {
        args.push(format!("{}=true", INCLUDE_GENERATED_KEY).into());
    }
    if options.include_subrepositories() {
        args.push(format!("{}=true", INCLUDE_SUBREPOSITORIES_KEY).into());
    }

    args
}

fn path_setting(key: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(format!("{}=", key));
    arg.push(path.as_os_str());
    arg
}

fn list_setting(key: &str, values: &[String]) -> OsString {
    format!("{}={}", key, values.join(",")).into()
}
