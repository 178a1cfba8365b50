//! Ensamblado final de la oración

/// Signos que nunca llevan espacio delante
const ATTACHING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Signos que cierran una oración
const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Deja la oración lista para mostrar:
/// - reduce cada tramo de espacios a uno solo
/// - quita los espacios delante de `. , ! ? ; :`
/// - pone en mayúscula el primer carácter alfabético
/// - añade un punto si no termina en `. ! ?`
///
/// Una cadena vacía (o solo espacios) se devuelve vacía.
pub fn finalize_sentence(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let attached = attach_punctuation(text);
    let mut sentence = capitalize_first_alphabetic(&attached);

    if !sentence.ends_with(TERMINAL_PUNCTUATION) {
        sentence.push('.');
    }

    sentence
}

fn attach_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !ATTACHING_PUNCTUATION.contains(&c) {
            result.push(' ');
        }
        pending_space = false;
        result.push(c);
    }

    result
}

fn capitalize_first_alphabetic(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, c)) => {
            let mut result = String::with_capacity(text.len());
            result.push_str(&text[..idx]);
            result.extend(c.to_uppercase());
            result.push_str(&text[idx + c.len_utf8()..]);
            result
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_and_adds_period() {
        assert_eq!(finalize_sentence("he ran quickly"), "He ran quickly.");
    }

    #[test]
    fn test_removes_space_before_punctuation() {
        assert_eq!(
            finalize_sentence("we stayed home , because it rained ."),
            "We stayed home, because it rained."
        );
        assert_eq!(
            finalize_sentence("wait ; then go : now !"),
            "Wait; then go: now!"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(finalize_sentence("  the   dog\tbarks  "), "The dog barks.");
    }

    #[test]
    fn test_keeps_existing_terminal() {
        assert_eq!(finalize_sentence("is it ?"), "Is it?");
        assert_eq!(finalize_sentence("Stop!"), "Stop!");
    }

    #[test]
    fn test_capitalizes_first_alphabetic_character() {
        assert_eq!(
            finalize_sentence("\"hello\" she said"),
            "\"Hello\" she said."
        );
        assert_eq!(finalize_sentence("3 dogs barked"), "3 Dogs barked.");
        assert_eq!(finalize_sentence("élan matters"), "Élan matters.");
    }

    #[test]
    fn test_without_letters() {
        assert_eq!(finalize_sentence("42"), "42.");
        assert_eq!(finalize_sentence("..."), "...");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(finalize_sentence(""), "");
        assert_eq!(finalize_sentence("   "), "");
    }
}
