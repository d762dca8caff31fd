//! Download URLs for artifacts in a Maven-style repository
//!
//! Pure string building; inputs are not validated.

/// Liferay public releases repository
pub const PUBLIC_REPOSITORY_URL: &str =
    "https://repository.liferay.com/nexus/content/repositories/liferay-public-releases";

/// URL of `<artifact>-<version>.jar` under `base`
///
/// The group is turned into a path by replacing `.` with `/`; the artifact id
/// is used as a single path segment.
pub fn jar_url(base: &str, group: &str, artifact: &str, version: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}-{}.jar",
        base.trim_end_matches('/'),
        group.replace('.', "/"),
        artifact,
        version,
        artifact,
        version
    )
}

/// URL of a `com.liferay` jar in the public repository
pub fn liferay_jar_url(artifact: &str, version: &str) -> String {
    jar_url(PUBLIC_REPOSITORY_URL, "com.liferay", artifact, version)
}

/// URL of a `com.liferay.portal` jar in the public repository
pub fn liferay_portal_jar_url(artifact: &str, version: &str) -> String {
    jar_url(PUBLIC_REPOSITORY_URL, "com.liferay.portal", artifact, version)
}
