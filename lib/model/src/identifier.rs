use crate::vocab::namespaces;
use oxrdf::NamedNode;
use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The kind of named entity whose identifier is derived from a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Player,
    Team,
}

impl EntityKind {
    /// The namespace IRI that local names of this kind are appended to.
    pub fn namespace(self) -> &'static str {
        match self {
            EntityKind::Player => namespaces::PLAYER,
            EntityKind::Team => namespaces::TEAM,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Player => f.write_str("player"),
            EntityKind::Team => f.write_str("team"),
        }
    }
}

/// Normalizes a display name into the local part of an identifier.
///
/// Spaces become underscores and periods, forward slashes and apostrophes are removed. No other
/// character is touched, so `"Mohammad Irfan Jr."` becomes `"Mohammad_Irfan_Jr"`.
pub fn local_name(raw_name: &str) -> String {
    raw_name
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '\''))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Builds the identifier of a player or a team from its display name.
///
/// The function is total: every input, including the empty string, yields an IRI. The local name
/// is percent-encoded where needed so that the result is always a valid IRI.
pub fn build_identifier(raw_name: &str, kind: EntityKind) -> NamedNode {
    named_node_in(kind.namespace(), &local_name(raw_name))
}

/// The identifier of the statistics record created for the CSV row at `row_index`.
pub fn stats_identifier(row_index: usize) -> NamedNode {
    NamedNode::new_unchecked(format!("{}bowling_stats_{row_index}", namespaces::STATS))
}

/// Appends an already normalized local name to `namespace`.
pub fn named_node_in(namespace: &str, local_name: &str) -> NamedNode {
    let mut iri = String::with_capacity(namespace.len() + local_name.len());
    iri.push_str(namespace);
    push_escaped(&mut iri, local_name);
    NamedNode::new_unchecked(iri)
}

/// Returns the local name of `iri` if it lives in the namespace of `kind`.
///
/// Percent-encoded sequences are not decoded.
pub fn strip_namespace(iri: &str, kind: EntityKind) -> Option<&str> {
    iri.strip_prefix(kind.namespace())
}

fn push_escaped(target: &mut String, local_name: &str) {
    for c in local_name.chars() {
        if is_path_char(c) {
            target.push(c);
        } else {
            let mut buffer = [0; 4];
            for byte in c.encode_utf8(&mut buffer).bytes() {
                target.push('%');
                target.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                target.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
        }
    }
}

/// Characters that may appear verbatim in an IRI path segment.
///
/// `%` is excluded so that the encoding stays injective. `#` and `?` would end the path.
fn is_path_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.'
                    | '_'
                    | '~'
                    | '!'
                    | '$'
                    | '&'
                    | '\''
                    | '('
                    | ')'
                    | '*'
                    | '+'
                    | ','
                    | ';'
                    | '='
                    | ':'
                    | '@'
            )
    } else {
        c.is_alphanumeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiri::Iri;

    #[test]
    fn normalizes_spaces_periods_slashes_and_apostrophes() {
        assert_eq!(local_name("Shaheen Shah Afridi"), "Shaheen_Shah_Afridi");
        assert_eq!(local_name("Mohammad Irfan Jr."), "Mohammad_Irfan_Jr");
        assert_eq!(local_name("Lahore/Qalanders"), "LahoreQalanders");
        assert_eq!(local_name("D'Arcy Short"), "DArcy_Short");
    }

    #[test]
    fn leaves_other_characters_untouched() {
        assert_eq!(local_name("Rilee-Rossouw (c)"), "Rilee-Rossouw_(c)");
        assert_eq!(local_name("Zoë"), "Zoë");
    }

    #[test]
    fn builds_identifiers_in_the_right_namespace() {
        assert_eq!(
            build_identifier("Shaheen Shah Afridi", EntityKind::Player).as_str(),
            "http://example.org/cricket/resource/player/Shaheen_Shah_Afridi"
        );
        assert_eq!(
            build_identifier("Lahore Qalanders", EntityKind::Team).as_str(),
            "http://example.org/cricket/resource/team/Lahore_Qalanders"
        );
        assert_eq!(
            stats_identifier(3).as_str(),
            "http://example.org/cricket/resource/stats/bowling_stats_3"
        );
    }

    #[test]
    fn is_idempotent() {
        let first = build_identifier("Wahab Riaz", EntityKind::Player);
        let second = build_identifier("Wahab Riaz", EntityKind::Player);
        assert_eq!(first, second);
        assert_eq!(local_name(&local_name("Wahab Riaz")), local_name("Wahab Riaz"));
    }

    #[test]
    fn empty_names_still_yield_an_identifier() {
        assert_eq!(
            build_identifier("", EntityKind::Team).as_str(),
            "http://example.org/cricket/resource/team/"
        );
    }

    #[test]
    fn escapes_characters_that_are_not_allowed_in_iris() {
        let node = build_identifier("A#B?C%D\"E<F>", EntityKind::Player);
        assert_eq!(
            node.as_str(),
            "http://example.org/cricket/resource/player/A%23B%3FC%25D%22E%3CF%3E"
        );
        assert!(Iri::parse(node.as_str()).is_ok());
    }

    #[test]
    fn escaping_keeps_distinct_names_distinct() {
        let encoded = build_identifier("A%23", EntityKind::Player);
        let raw = build_identifier("A#", EntityKind::Player);
        assert_ne!(encoded, raw);
    }

    #[test]
    fn strips_namespaces() {
        let node = build_identifier("Hasan Ali", EntityKind::Player);
        assert_eq!(
            strip_namespace(node.as_str(), EntityKind::Player),
            Some("Hasan_Ali")
        );
        assert_eq!(strip_namespace(node.as_str(), EntityKind::Team), None);
    }
}
