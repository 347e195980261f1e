use anyhow::Error;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Step through `items` from `current`, wrapping at both ends. Falls back to
/// the first item when `current` is not in the list.
pub(crate) fn cycle<T: Copy + PartialEq>(items: &[T], current: T, step: isize) -> T {
    let Some(position) = items.iter().position(|item| *item == current) else {
        return items.first().copied().unwrap_or(current);
    };
    let len = items.len() as isize;
    items[(position as isize + step).rem_euclid(len) as usize]
}

/// Like [`cycle`], but with an extra leading "match everything" slot
/// represented by `None`.
pub(crate) fn cycle_filter<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    step: isize,
) -> Option<T> {
    let slots: Vec<Option<T>> = std::iter::once(None)
        .chain(options.iter().copied().map(Some))
        .collect();
    cycle(&slots, current, step)
}

/// Render one `Label: value` row of a form. Selectors get arrow hints while
/// focused so it is obvious Left/Right changes them.
pub(crate) fn field_line(
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_selector: bool,
) -> Line<'static> {
    let display = if value.is_empty() {
        placeholder.to_string()
    } else if is_selector && is_active {
        format!("◀ {value} ▶")
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(display, style),
    ])
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_in_both_directions() {
        let items = [1, 2, 3];
        assert_eq!(cycle(&items, 3, 1), 1);
        assert_eq!(cycle(&items, 1, -1), 3);
        assert_eq!(cycle(&items, 7, 1), 1);
    }

    #[test]
    fn cycle_filter_passes_through_match_all() {
        let options = ['a', 'b'];
        assert_eq!(cycle_filter(&options, None, 1), Some('a'));
        assert_eq!(cycle_filter(&options, Some('b'), 1), None);
        assert_eq!(cycle_filter(&options, None, -1), Some('b'));
        assert_eq!(cycle_filter(&[] as &[char], None, 1), None);
    }
}
