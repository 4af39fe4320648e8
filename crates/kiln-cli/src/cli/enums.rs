use clap::ValueEnum;

/// Output format for `kiln show`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,

    /// TOML, in the same layout kiln.toml uses
    #[value(name = "toml")]
    Toml,
}
