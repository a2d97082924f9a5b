use chrono::NaiveDate;

/// How many digits a day or month component may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    /// `DD` / `MM`
    Two,
    /// `D` / `M`: one or two digits
    OneOrTwo,
}

impl Width {
    fn accepts(self, s: &str) -> bool {
        let ok_len = match self {
            Width::Two => s.len() == 2,
            Width::OneOrTwo => (1..=2).contains(&s.len()),
        };
        ok_len && s.bytes().all(|b| b.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    DayFirst { day: Width, month: Width },
    MonthFirst { month: Width, day: Width },
    YearOnly,
}

/// A single slash-separated date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLayout {
    pub label: &'static str,
    shape: Shape,
}

pub const DD_MM_YYYY: DateLayout = DateLayout {
    label: "DD/MM/YYYY",
    shape: Shape::DayFirst {
        day: Width::Two,
        month: Width::Two,
    },
};
pub const D_M_YYYY: DateLayout = DateLayout {
    label: "D/M/YYYY",
    shape: Shape::DayFirst {
        day: Width::OneOrTwo,
        month: Width::OneOrTwo,
    },
};
pub const M_D_YYYY: DateLayout = DateLayout {
    label: "M/D/YYYY",
    shape: Shape::MonthFirst {
        month: Width::OneOrTwo,
        day: Width::OneOrTwo,
    },
};
pub const DD_M_YYYY: DateLayout = DateLayout {
    label: "DD/M/YYYY",
    shape: Shape::DayFirst {
        day: Width::Two,
        month: Width::OneOrTwo,
    },
};
pub const D_MM_YYYY: DateLayout = DateLayout {
    label: "D/MM/YYYY",
    shape: Shape::DayFirst {
        day: Width::OneOrTwo,
        month: Width::Two,
    },
};
pub const YYYY: DateLayout = DateLayout {
    label: "YYYY",
    shape: Shape::YearOnly,
};

/// Tried in this order; day-first wins on ambiguous input.
pub static DEFAULT_LAYOUTS: &[DateLayout] = &[DD_MM_YYYY, D_M_YYYY, M_D_YYYY, DD_M_YYYY, D_MM_YYYY];

/// Same as [`DEFAULT_LAYOUTS`] with a trailing bare-year layout.
pub static LAYOUTS_WITH_BARE_YEAR: &[DateLayout] =
    &[DD_MM_YYYY, D_M_YYYY, M_D_YYYY, DD_M_YYYY, D_MM_YYYY, YYYY];

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl DateLayout {
    /// Strict parse of an already trimmed string.
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        let (day_width, month_width, month_first) = match self.shape {
            Shape::YearOnly => return NaiveDate::from_ymd_opt(parse_year(s)?, 1, 1),
            Shape::DayFirst { day, month } => (day, month, false),
            Shape::MonthFirst { month, day } => (day, month, true),
        };

        let mut parts = s.split('/');
        let (first, second, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let (day, month) = if month_first {
            (second, first)
        } else {
            (first, second)
        };
        if !day_width.accepts(day) || !month_width.accepts(month) {
            return None;
        }

        NaiveDate::from_ymd_opt(parse_year(year)?, month.parse().ok()?, day.parse().ok()?)
    }
}

/// Ordered list of layouts; the first one that parses wins.
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    layouts: &'static [DateLayout],
}

impl Default for DateParser {
    fn default() -> Self {
        DateParser {
            layouts: DEFAULT_LAYOUTS,
        }
    }
}

impl DateParser {
    pub fn new(layouts: &'static [DateLayout]) -> Self {
        DateParser { layouts }
    }

    pub fn with_bare_year(accept: bool) -> Self {
        if accept {
            DateParser::new(LAYOUTS_WITH_BARE_YEAR)
        } else {
            DateParser::default()
        }
    }

    pub fn layouts(&self) -> &'static [DateLayout] {
        self.layouts
    }

    /// Returns the date and the label of the layout that matched.
    pub fn parse(&self, raw: &str) -> Option<(NaiveDate, &'static str)> {
        let s = raw.trim();
        self.layouts
            .iter()
            .find_map(|layout| layout.parse(s).map(|d| (d, layout.label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ambiguous_dates_are_day_first() {
        let p = DateParser::default();
        assert_eq!(p.parse("03/04/2020"), Some((ymd(2020, 4, 3), "DD/MM/YYYY")));
        assert_eq!(p.parse("3/4/2020"), Some((ymd(2020, 4, 3), "D/M/YYYY")));
    }

    #[test]
    fn month_first_only_when_day_first_is_impossible() {
        let p = DateParser::default();
        assert_eq!(p.parse("12/25/2023"), Some((ymd(2023, 12, 25), "M/D/YYYY")));
        assert_eq!(p.parse("2/29/2024"), Some((ymd(2024, 2, 29), "M/D/YYYY")));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let p = DateParser::default();
        assert_eq!(p.parse("  15/03/2023\t"), Some((ymd(2023, 3, 15), "DD/MM/YYYY")));
    }

    #[test]
    fn width_rules_are_strict() {
        assert_eq!(DD_MM_YYYY.parse("3/04/2020"), None);
        assert_eq!(DD_MM_YYYY.parse("03/4/2020"), None);
        assert_eq!(D_MM_YYYY.parse("3/04/2020"), Some(ymd(2020, 4, 3)));
        assert_eq!(DD_M_YYYY.parse("03/4/2020"), Some(ymd(2020, 4, 3)));
        assert_eq!(D_M_YYYY.parse("003/4/2020"), None);
        assert_eq!(D_M_YYYY.parse("3/4/20"), None);
        assert_eq!(D_M_YYYY.parse("3/4/2020/1"), None);
        assert_eq!(D_M_YYYY.parse("+3/4/2020"), None);
    }

    #[test]
    fn unparseable_strings_yield_none() {
        let p = DateParser::default();
        for s in ["not-a-date", "", "2023-03-15", "32/13/2023", "31/02/2023", "2023"] {
            assert_eq!(p.parse(s), None, "{s:?} should not parse");
        }
    }

    #[test]
    fn bare_year_only_in_that_variant() {
        assert_eq!(DateParser::default().parse("2021"), None);
        let p = DateParser::with_bare_year(true);
        assert_eq!(p.parse("2021"), Some((ymd(2021, 1, 1), "YYYY")));
        // slash forms still take precedence
        assert_eq!(p.parse("03/04/2020"), Some((ymd(2020, 4, 3), "DD/MM/YYYY")));
        assert_eq!(p.parse("21"), None);
    }
}
