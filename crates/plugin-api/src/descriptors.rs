/// Static metadata advertising a build plugin.
///
/// Descriptors are declared as `static` items by the plugin crates so that
/// registry entries can hand out `&'static` references without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Identifier the configuration document references this plugin by.
    pub id: &'static str,
    /// One-line description shown by `--list-plugins`.
    pub summary: &'static str,
    /// Where the plugin's own documentation lives.
    pub docs_url: &'static str,
}
