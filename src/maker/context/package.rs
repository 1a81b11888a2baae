//! Package metadata for the application being made.

/// Package metadata and configuration.
///
/// Contains the application identity used in the generated app builder
/// config. This typically maps from `Cargo.toml` `[package]` section.
///
/// # Examples
///
/// ```no_run
/// use kodegen_maker_nsis::maker::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "MyApp".into(),
///     version: "1.0.0".into(),
///     description: "An awesome application".into(),
///     homepage: Some("https://example.com".into()),
///     authors: Some(vec!["Author Name <email@example.com>".into()]),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageSettings {
    /// Product name displayed to users.
    ///
    /// Shown in installer dialogs and the Start menu.
    pub product_name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.0.0", "0.2.3-beta.1". Empty means unknown.
    pub version: String,

    /// Brief description of the application.
    pub description: String,

    /// Homepage URL for the application.
    ///
    /// Default: None
    pub homepage: Option<String>,

    /// List of package authors.
    ///
    /// Format: "Name <email@example.com>"
    ///
    /// Default: None
    pub authors: Option<Vec<String>>,
}
