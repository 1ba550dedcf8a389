use clap::Subcommand;

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List message templates
    List,
}
