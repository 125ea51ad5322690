use crate::vocab::xsd;
use oxrdf::Literal;

/// Converts a raw CSV cell into a number.
///
/// Surrounding whitespace is ignored. Empty cells, cells that do not parse as a number and
/// non-finite values (`NaN`, `inf`) are all absent. The parsed value is kept as is.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// The XSD datatype a numeric column is published with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericDatatype {
    /// `xsd:float`, always written with a fractional part.
    Float,
    /// `xsd:integer`, falling back to `xsd:decimal` for values that are not integral.
    Integer,
}

impl NumericDatatype {
    /// Builds the literal for `value`.
    pub fn literal(self, value: f64) -> Literal {
        match self {
            NumericDatatype::Float => float_literal(value),
            NumericDatatype::Integer => count_literal(value),
        }
    }
}

/// An `xsd:float` literal. Integral values keep a trailing `.0` (`50.0`).
pub fn float_literal(value: f64) -> Literal {
    let lexical = if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    };
    Literal::new_typed_literal(lexical, xsd::FLOAT)
}

/// An `xsd:integer` literal for integral values.
///
/// Values with a fractional part are not truncated. They become an `xsd:decimal` instead.
pub fn count_literal(value: f64) -> Literal {
    if value.fract() == 0.0 {
        Literal::new_typed_literal(format!("{value:.0}"), xsd::INTEGER)
    } else {
        Literal::new_typed_literal(value.to_string(), xsd::DECIMAL)
    }
}

/// An `xsd:string` literal.
pub fn string_literal(value: impl Into<String>) -> Literal {
    Literal::new_typed_literal(value, xsd::STRING)
}

/// A literal tagged with the `en` language.
pub fn english_literal(value: impl Into<String>) -> Literal {
    Literal::new_language_tagged_literal_unchecked(value, "en")
}

/// Reads a numeric literal back into a number.
///
/// Returns [`None`] for non numeric datatypes and values that do not parse.
pub fn literal_to_f64(literal: &Literal) -> Option<f64> {
    let datatype = literal.datatype();
    let numeric = datatype == xsd::FLOAT
        || datatype == xsd::DOUBLE
        || datatype == xsd::DECIMAL
        || datatype == xsd::INTEGER
        || datatype == xsd::INT
        || datatype == xsd::LONG
        || datatype == xsd::NON_NEGATIVE_INTEGER;
    if numeric {
        coerce_numeric(literal.value())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_cells_are_absent() {
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("   "), None);
    }

    #[test]
    fn invalid_cells_are_absent() {
        assert_eq!(coerce_numeric("-"), None);
        assert_eq!(coerce_numeric("6/19"), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
    }

    #[test]
    fn parses_numbers_without_rounding() {
        assert_eq!(coerce_numeric(" 7.2 "), Some(7.2));
        assert_eq!(coerce_numeric("50"), Some(50.0));
        assert_eq!(coerce_numeric("0"), Some(0.0));
        assert_eq!(coerce_numeric("7.4166"), Some(7.4166));
    }

    #[test]
    fn float_literals_carry_a_fractional_part() {
        assert_eq!(float_literal(50.0).value(), "50.0");
        assert_eq!(float_literal(7.2).value(), "7.2");
        assert_eq!(float_literal(50.0).datatype(), xsd::FLOAT);
    }

    #[test]
    fn integral_counts_are_integers() {
        let literal = count_literal(30.0);
        assert_eq!(literal.value(), "30");
        assert_eq!(literal.datatype(), xsd::INTEGER);
    }

    #[test]
    fn fractional_counts_become_decimals() {
        let literal = count_literal(2.5);
        assert_eq!(literal.value(), "2.5");
        assert_eq!(literal.datatype(), xsd::DECIMAL);
    }

    #[test]
    fn reads_numeric_literals() {
        assert_eq!(literal_to_f64(&float_literal(7.2)), Some(7.2));
        assert_eq!(literal_to_f64(&count_literal(30.0)), Some(30.0));
        assert_eq!(literal_to_f64(&string_literal("30")), None);
    }
}
