//! Per-field coercions shared by the converters

use crate::types::Cell;

/// Coerce a Section cell to an integer, 0 when it is not numeric.
///
/// Numbers truncate toward zero; text is trimmed and parsed as a number.
pub fn coerce_section(cell: &Cell) -> i64 {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => return 0,
        },
        Cell::Bool(b) => return i64::from(*b),
        Cell::DateTime(_) | Cell::Time(_) | Cell::Empty => return 0,
    };

    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// Render a cell as text, missing cells as `""`
pub fn text_or_empty(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        other => other.render(),
    }
}

/// Render and trim a cell; `None` when the cell is missing
pub fn trimmed(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        other => Some(other.render().trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_section_numbers() {
        assert_eq!(coerce_section(&Cell::Number(3.0)), 3);
        assert_eq!(coerce_section(&Cell::Number(3.9)), 3);
        assert_eq!(coerce_section(&Cell::Number(-2.5)), -2);
    }

    #[test]
    fn test_coerce_section_text() {
        assert_eq!(coerce_section(&Cell::Text("3".to_string())), 3);
        assert_eq!(coerce_section(&Cell::Text(" 12 ".to_string())), 12);
        assert_eq!(coerce_section(&Cell::Text("5678".to_string())), 5678);
        assert_eq!(coerce_section(&Cell::Text("4.0".to_string())), 4);
    }

    #[test]
    fn test_coerce_section_unparsable_is_zero() {
        assert_eq!(coerce_section(&Cell::Text("x".to_string())), 0);
        assert_eq!(coerce_section(&Cell::Text(String::new())), 0);
        assert_eq!(coerce_section(&Cell::Text("inf".to_string())), 0);
        assert_eq!(coerce_section(&Cell::Number(f64::NAN)), 0);
        assert_eq!(coerce_section(&Cell::Empty), 0);

        let eight = chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(coerce_section(&Cell::Time(eight)), 0);
    }

    #[test]
    fn test_coerce_section_bool() {
        assert_eq!(coerce_section(&Cell::Bool(true)), 1);
        assert_eq!(coerce_section(&Cell::Bool(false)), 0);
    }

    #[test]
    fn test_text_or_empty() {
        assert_eq!(text_or_empty(&Cell::Empty), "");
        assert_eq!(text_or_empty(&Cell::Number(101.0)), "101");
        assert_eq!(text_or_empty(&Cell::Text(" A ".to_string())), " A ");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed(&Cell::Empty), None);
        assert_eq!(trimmed(&Cell::Text("  ".to_string())), Some(String::new()));
        assert_eq!(trimmed(&Cell::Text(" Math ".to_string())), Some("Math".to_string()));
        assert_eq!(trimmed(&Cell::Number(1001.0)), Some("1001".to_string()));
    }
}
