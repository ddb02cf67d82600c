use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the effective configuration (defaults merged with the file)
    Show,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        let output = self.render()?;
        println!("{output}");
        Ok(())
    }

    fn render(&self) -> anyhow::Result<String> {
        match self {
            Self::Schema => {
                let schema = crate::shared::config::generate_schema();
                Ok(serde_json::to_string_pretty(&schema)?)
            }
            Self::Show => {
                let config = crate::shared::config::load_config()?;
                Ok(format!("{config:#?}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_renders_as_json() {
        let output = ConfigCommands::Schema.render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["title"], "Config");
        assert_eq!(value["type"], "object");
    }

    #[test]
    fn show_renders_defaults_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        temp_env::with_vars(
            [("XDG_CONFIG_HOME", Some(dir.path().to_str().unwrap()))],
            || {
                let output = ConfigCommands::Show.render().unwrap();
                assert!(output.contains("https://api.github.com/graphql"));
                assert!(output.contains("wrap_width: 69"));
            },
        );
    }
}
