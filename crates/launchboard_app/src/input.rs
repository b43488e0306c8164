//! Watch-mode commands read from stdin, one per line.

use launchboard_core::FilterField;

pub const HELP: &str = "\
Commands:
  year <value>       launch year, e.g. 2017
  success <value>    true or false
  category <value>   e.g. mission_name, rocket_name, rocket_id
  query <value>      search text for the category
  <field>            clear a field
  help               show this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Set { field: FilterField, value: String },
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses `field value`, `field=value`, `help` or `quit`.
pub fn parse_line(line: &str) -> InputCommand {
    let line = line.trim();
    if line.is_empty() {
        return InputCommand::Empty;
    }

    let (head, rest) = line
        .split_once(|c: char| c == '=' || c.is_whitespace())
        .unwrap_or((line, ""));

    // Allows `field = value` as well.
    let rest = rest.trim();
    let value = rest.strip_prefix('=').unwrap_or(rest).trim();

    match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => InputCommand::Quit,
        "help" | "?" => InputCommand::Help,
        _ => match FilterField::from_name(head) {
            Some(field) => InputCommand::Set {
                field,
                value: value.to_string(),
            },
            None => InputCommand::Unknown(head.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_and_value() {
        assert_eq!(
            parse_line("year 2017"),
            InputCommand::Set {
                field: FilterField::Year,
                value: "2017".to_string()
            }
        );
        assert_eq!(
            parse_line("  query   Falcon Heavy  "),
            InputCommand::Set {
                field: FilterField::Query,
                value: "Falcon Heavy".to_string()
            }
        );
    }

    #[test]
    fn element_ids_and_equals_form() {
        assert_eq!(
            parse_line("launchSuccess=true"),
            InputCommand::Set {
                field: FilterField::Success,
                value: "true".to_string()
            }
        );
        assert_eq!(
            parse_line("searchCategory = rocket_id"),
            InputCommand::Set {
                field: FilterField::Category,
                value: "rocket_id".to_string()
            }
        );
    }

    #[test]
    fn bare_field_clears_it() {
        assert_eq!(
            parse_line("year"),
            InputCommand::Set {
                field: FilterField::Year,
                value: String::new()
            }
        );
    }

    #[test]
    fn control_words_and_noise() {
        assert_eq!(parse_line("quit"), InputCommand::Quit);
        assert_eq!(parse_line("EXIT"), InputCommand::Quit);
        assert_eq!(parse_line("help"), InputCommand::Help);
        assert_eq!(parse_line("   "), InputCommand::Empty);
        assert_eq!(
            parse_line("rocket falcon9"),
            InputCommand::Unknown("rocket".to_string())
        );
    }
}
