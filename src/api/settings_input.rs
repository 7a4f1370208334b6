//! Input boundary for settings coming from host form fields.
//!
//! Raw text input is parsed and range-checked here, before it can reach the
//! settings store. Anything invalid is dropped silently: the editor degrades
//! rather than interrupting the editing flow, and the previous value stays.

use tracing::debug;

use crate::core::SettingsPatch;

/// String-valued settings fields (labels and colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSettingField {
    TopLabel,
    RightLabel,
    BottomLabel,
    LeftLabel,
    ChartColor,
    AxisColor,
    GridColor,
}

/// Integer-valued settings fields, each with a declared accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSettingField {
    LabelSize,
    EntryNameSize,
    ChartSize,
    GridSize,
    ArrowSize,
}

/// Inclusive accepted range for a numeric field; `None` bounds are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl NumericRange {
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        if let Some(min) = self.min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        true
    }
}

impl NumericSettingField {
    #[must_use]
    pub const fn range(self) -> NumericRange {
        match self {
            Self::LabelSize | Self::EntryNameSize | Self::ChartSize => NumericRange::at_least(10),
            Self::GridSize => NumericRange::at_least(0),
            Self::ArrowSize => NumericRange::unconstrained(),
        }
    }
}

/// Parses the leading integer of a text input.
///
/// Mirrors lenient form-field parsing: surrounding whitespace is ignored, an
/// optional sign is honored, and trailing garbage after the digits is
/// dropped (`"42px"` parses as 42). Returns `None` when no digits lead.
#[must_use]
pub fn parse_integer_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_count = digits.chars().take_while(char::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude: i64 = digits[..digit_count].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Builds the patch for one numeric field from raw input.
///
/// Returns `None` (leaving the store untouched) for non-numeric input,
/// out-of-range values, and values that do not fit the field's storage type.
#[must_use]
pub fn numeric_setting_patch(field: NumericSettingField, raw: &str) -> Option<SettingsPatch> {
    let value = parse_integer_input(raw)?;
    if !field.range().contains(value) {
        debug!(?field, value, "rejected out-of-range setting input");
        return None;
    }

    let mut patch = SettingsPatch::default();
    match field {
        NumericSettingField::LabelSize => patch.label_size = Some(u32::try_from(value).ok()?),
        NumericSettingField::EntryNameSize => {
            patch.entry_name_size = Some(u32::try_from(value).ok()?);
        }
        NumericSettingField::ChartSize => patch.chart_size = Some(u32::try_from(value).ok()?),
        NumericSettingField::GridSize => patch.grid_size = Some(u32::try_from(value).ok()?),
        NumericSettingField::ArrowSize => patch.arrow_size = Some(i32::try_from(value).ok()?),
    }
    Some(patch)
}

/// Builds the patch for one string field. Text fields accept any value.
#[must_use]
pub fn text_setting_patch(field: TextSettingField, value: &str) -> SettingsPatch {
    let mut patch = SettingsPatch::default();
    let value = value.to_owned();
    match field {
        TextSettingField::TopLabel => patch.top_label = Some(value),
        TextSettingField::RightLabel => patch.right_label = Some(value),
        TextSettingField::BottomLabel => patch.bottom_label = Some(value),
        TextSettingField::LeftLabel => patch.left_label = Some(value),
        TextSettingField::ChartColor => patch.chart_color = Some(value),
        TextSettingField::AxisColor => patch.axis_color = Some(value),
        TextSettingField::GridColor => patch.grid_color = Some(value),
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::{NumericSettingField, numeric_setting_patch, parse_integer_input};

    #[test]
    fn parses_leading_integers() {
        assert_eq!(parse_integer_input("42"), Some(42));
        assert_eq!(parse_integer_input("  -7  "), Some(-7));
        assert_eq!(parse_integer_input("42px"), Some(42));
        assert_eq!(parse_integer_input("+13"), Some(13));
        assert_eq!(parse_integer_input(""), None);
        assert_eq!(parse_integer_input("px42"), None);
        assert_eq!(parse_integer_input("-"), None);
    }

    #[test]
    fn grid_size_boundary_is_inclusive() {
        assert!(numeric_setting_patch(NumericSettingField::GridSize, "0").is_some());
        assert!(numeric_setting_patch(NumericSettingField::GridSize, "-5").is_none());
    }

    #[test]
    fn label_size_enforces_min_ten() {
        assert!(numeric_setting_patch(NumericSettingField::LabelSize, "9").is_none());
        let patch =
            numeric_setting_patch(NumericSettingField::LabelSize, "10").expect("accepted");
        assert_eq!(patch.label_size, Some(10));
    }

    #[test]
    fn arrow_size_accepts_negatives() {
        let patch =
            numeric_setting_patch(NumericSettingField::ArrowSize, "-4").expect("accepted");
        assert_eq!(patch.arrow_size, Some(-4));
    }
}
