use chrono::{DateTime, Utc};

/// Build the echo reply for one text message.
///
/// The template is fixed for this deployment (Portuguese), with the instant
/// rendered in UTC as `HH:MM:SS de DD/MM/YYYY`. The original text is quoted
/// back verbatim, whatever it contains.
pub fn format_reply(name: &str, text: &str, when: DateTime<Utc>) -> String {
    let timestamp = when.format("%H:%M:%S de %d/%m/%Y");
    format!("Olá {name}. Você digitou '{text}'. Agora são {timestamp}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_full_template() {
        assert_eq!(
            format_reply("Ana", "oi", instant()),
            "Olá Ana. Você digitou 'oi'. Agora são 14:05:07 de 09/03/2024."
        );
    }

    #[test]
    fn test_empty_text_is_quoted_verbatim() {
        let reply = format_reply("Ana", "", instant());
        assert!(reply.contains("Você digitou ''."));
    }

    #[test]
    fn test_text_with_quotes_passes_through() {
        let reply = format_reply("Bruno", "disse 'olá' ontem", instant());
        assert!(reply.contains("Olá Bruno."));
        assert!(reply.contains("'disse 'olá' ontem'"));
    }

    #[test]
    fn test_control_characters_pass_through() {
        let reply = format_reply("Ana", "linha1\nlinha2\t", instant());
        assert!(reply.contains("linha1\nlinha2\t"));
    }

    #[test]
    fn test_single_digit_fields_are_zero_padded() {
        let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let reply = format_reply("Ana", "oi", when);
        assert!(reply.contains("03:04:05 de 02/01/2024"));
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        assert_eq!(
            format_reply("Ana", "oi", instant()),
            format_reply("Ana", "oi", instant())
        );
    }
}
