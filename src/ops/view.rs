use crate::model::task::Task;

/// Which tasks the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Favourite,
    Active,
    Completed,
}

impl FilterMode {
    /// Tab-bar display order
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Favourite,
        FilterMode::Active,
        FilterMode::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Favourite => "Favourite",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Parse a mode label from config or the command line (case-insensitive).
    pub fn parse(s: &str) -> Option<FilterMode> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(FilterMode::All),
            "favourite" | "favorite" | "starred" => Some(FilterMode::Favourite),
            "active" => Some(FilterMode::Active),
            "completed" | "done" => Some(FilterMode::Completed),
            _ => None,
        }
    }

    /// Does this filter pass the given task?
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Favourite => task.starred,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    /// Next filter in tab order, wrapping
    pub fn next(self) -> FilterMode {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous filter in tab order, wrapping
    pub fn prev(self) -> FilterMode {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How the list view orders tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ByDate,
    Alphabetical,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::ByDate => "date",
            SortMode::Alphabetical => "alpha",
        }
    }

    /// Parse a mode label from config or the command line (case-insensitive).
    pub fn parse(s: &str) -> Option<SortMode> {
        match s.to_ascii_lowercase().as_str() {
            "date" | "bydate" | "created" => Some(SortMode::ByDate),
            "alpha" | "alphabetical" | "name" => Some(SortMode::Alphabetical),
            _ => None,
        }
    }

    pub fn toggle(self) -> SortMode {
        match self {
            SortMode::ByDate => SortMode::Alphabetical,
            SortMode::Alphabetical => SortMode::ByDate,
        }
    }
}

/// Compute the filtered, sorted projection of `tasks` for display.
///
/// Pure: the input is never mutated, and equal inputs produce an equal
/// sequence. Sorting is stable — records that compare equal keep their
/// original list order. ByDate is newest first; Alphabetical compares
/// lowercased text, falling back to the raw text so differing cases
/// order deterministically.
pub fn project(tasks: &[Task], filter: FilterMode, sort: SortMode) -> Vec<&Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    match sort {
        SortMode::ByDate => {
            visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortMode::Alphabetical => {
            visible.sort_by(|a, b| {
                a.text
                    .to_lowercase()
                    .cmp(&b.text.to_lowercase())
                    .then_with(|| a.text.cmp(&b.text))
            });
        }
    }
    visible
}

/// Fraction of tasks completed, in [0, 1]. An empty list counts as 0
/// rather than dividing by zero.
pub fn completion_ratio(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    done as f64 / tasks.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn task(id: u64, text: &str, minute: u32) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed: false,
            starred: false,
            created_at: Local.with_ymd_and_hms(2025, 5, 14, 9, minute, 0).unwrap(),
        }
    }

    fn texts<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn all_passes_everything() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1)];
        tasks[0].completed = true;
        tasks[1].starred = true;

        let view = project(&tasks, FilterMode::All, SortMode::ByDate);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn active_is_exactly_the_uncompleted_subset() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1), task(3, "c", 2)];
        tasks[1].completed = true;

        let view = project(&tasks, FilterMode::Active, SortMode::ByDate);
        assert!(view.iter().all(|t| !t.completed));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn completed_is_exactly_the_completed_subset() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1)];
        tasks[0].completed = true;

        let view = project(&tasks, FilterMode::Completed, SortMode::ByDate);
        assert_eq!(texts(&view), vec!["a"]);
    }

    #[test]
    fn favourite_is_exactly_the_starred_subset() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1), task(3, "c", 2)];
        tasks[0].starred = true;
        tasks[2].starred = true;

        let view = project(&tasks, FilterMode::Favourite, SortMode::ByDate);
        assert!(view.iter().all(|t| t.starred));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn by_date_orders_newest_first() {
        let tasks = vec![task(1, "old", 0), task(2, "new", 30), task(3, "mid", 15)];
        let view = project(&tasks, FilterMode::All, SortMode::ByDate);
        assert_eq!(texts(&view), vec!["new", "mid", "old"]);
    }

    #[test]
    fn by_date_ties_keep_list_order() {
        let tasks = vec![task(1, "first", 0), task(2, "second", 0), task(3, "third", 0)];
        let view = project(&tasks, FilterMode::All, SortMode::ByDate);
        assert_eq!(texts(&view), vec!["first", "second", "third"]);
    }

    #[test]
    fn alphabetical_is_case_aware() {
        let tasks = vec![task(1, "banana", 0), task(2, "Apple", 1), task(3, "cherry", 2)];
        let view = project(&tasks, FilterMode::All, SortMode::Alphabetical);
        assert_eq!(texts(&view), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn alphabetical_ties_keep_list_order() {
        let tasks = vec![task(1, "same", 0), task(2, "same", 1), task(3, "same", 2)];
        let view = project(&tasks, FilterMode::All, SortMode::Alphabetical);
        let ids: Vec<u64> = view.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn project_never_mutates_its_input() {
        let mut tasks = vec![task(1, "b", 0), task(2, "a", 1)];
        tasks[0].completed = true;
        let before = tasks.clone();

        let _ = project(&tasks, FilterMode::Active, SortMode::Alphabetical);
        assert_eq!(tasks, before);
    }

    #[test]
    fn project_is_idempotent() {
        let tasks = vec![task(1, "b", 0), task(2, "a", 1), task(3, "c", 2)];
        let first = texts(&project(&tasks, FilterMode::All, SortMode::Alphabetical));
        let second = texts(&project(&tasks, FilterMode::All, SortMode::Alphabetical));
        assert_eq!(first, second);
    }

    #[test]
    fn completion_ratio_of_empty_is_zero() {
        assert_eq!(completion_ratio(&[]), 0.0);
    }

    #[test]
    fn completion_ratio_stays_in_bounds() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1), task(3, "c", 2)];
        let r = completion_ratio(&tasks);
        assert!((0.0..=1.0).contains(&r));

        tasks[0].completed = true;
        let r = completion_ratio(&tasks);
        assert!((r - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn completion_ratio_is_one_when_all_done() {
        let mut tasks = vec![task(1, "a", 0), task(2, "b", 1)];
        for t in &mut tasks {
            t.completed = true;
        }
        assert_eq!(completion_ratio(&tasks), 1.0);
    }

    #[test]
    fn mode_labels_round_trip() {
        for f in FilterMode::ALL {
            assert_eq!(FilterMode::parse(f.label()), Some(f));
        }
        for s in [SortMode::ByDate, SortMode::Alphabetical] {
            assert_eq!(SortMode::parse(s.label()), Some(s));
        }
        assert_eq!(FilterMode::parse("bogus"), None);
        assert_eq!(SortMode::parse("bogus"), None);
    }

    #[test]
    fn filter_cycling_wraps() {
        let mut f = FilterMode::All;
        for _ in 0..FilterMode::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, FilterMode::All);
        assert_eq!(FilterMode::All.prev(), FilterMode::Completed);
        assert_eq!(SortMode::ByDate.toggle().toggle(), SortMode::ByDate);
    }
}
