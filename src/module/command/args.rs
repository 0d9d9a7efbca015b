//! Command line splitting.
//!
//! Arguments are separated by whitespace. A double quote starts a group that runs to the
//! next double quote, so `"two words"` is one argument without its quotes. An unmatched
//! quote groups everything up to the end of the line. Each argument remembers the byte
//! offset it starts at in the original message, letting commands take "the rest of the
//! line" verbatim from any argument onward.

/// One parsed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument text with grouping quotes removed.
    pub text: String,
    /// Byte offset into the original content where the argument starts, including an
    /// opening quote.
    pub offset: usize,
}

/// Splits `content[start..]` into arguments.
///
/// # Arguments
/// - `content` - Full message content
/// - `start` - Byte offset to start parsing from, e.g. just past the command prefix
///
/// # Returns
/// - `Vec<Argument>` - Arguments in order; empty quoted groups are kept as empty arguments
pub fn parse_arguments(content: &str, start: usize) -> Vec<Argument> {
    let mut arguments = Vec::new();
    let mut current: Option<Argument> = None;
    let mut quoted = false;

    let Some(tail) = content.get(start..) else {
        return arguments;
    };

    for (index, ch) in tail.char_indices() {
        let offset = start + index;

        if ch == '"' {
            if quoted {
                quoted = false;
                if let Some(argument) = current.take() {
                    arguments.push(argument);
                }
            } else {
                if let Some(argument) = current.take() {
                    arguments.push(argument);
                }
                quoted = true;
                current = Some(Argument {
                    text: String::new(),
                    offset,
                });
            }
            continue;
        }

        if ch.is_whitespace() && !quoted {
            if let Some(argument) = current.take() {
                arguments.push(argument);
            }
            continue;
        }

        current
            .get_or_insert_with(|| Argument {
                text: String::new(),
                offset,
            })
            .text
            .push(ch);
    }

    if let Some(argument) = current {
        arguments.push(argument);
    }

    arguments
}
