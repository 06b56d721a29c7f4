use std::process;
use std::str::FromStr;

/// Exits the program with an error message
pub fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exits the program with an error message and usage information
pub fn exit_with_usage_error(message: &str, usage: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("{}", usage);
    process::exit(1);
}

/// Prints a formatted success message
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Output format for the export command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one applicant per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format '{}': expected text, json, or yaml",
                s
            )),
        }
    }
}

/// Prints formatted JSON with proper indentation
pub fn print_json<T>(value: &T) -> Result<(), serde_json::Error>
where
    T: serde::Serialize,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a value in the requested structured format, exiting on failure
pub fn print_formatted_or_exit<T>(value: &T, format: OutputFormat, context: &str)
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Text | OutputFormat::Json => {
            if let Err(e) = print_json(value) {
                exit_with_error(&format!("Failed to format {} JSON: {}", context, e));
            }
        }
        OutputFormat::Yaml => match serde_yml::to_string(value) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => exit_with_error(&format!("Failed to format {} YAML: {}", context, e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn empty_string_is_the_default_format() {
        assert_eq!("".parse::<OutputFormat>().unwrap(), OutputFormat::default());
    }
}
