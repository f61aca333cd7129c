//! View-local filtering, sorting, and aggregate counts.
//!
//! Pure and synchronous, reapplied to the full in-memory task array on every
//! render. No pagination; callers display the entire result set.

use chrono::{DateTime, Utc};

use crate::entities::{Category, Task};
use crate::errors::ClientError;

/// Completion-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(ClientError::InvalidStatusFilter {
                status: s.to_string(),
            }),
        }
    }
}

/// Category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => task.category == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.parse()?))
        }
    }
}

/// Combined view filter: title substring AND category AND status, all three
/// at once.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = self.search.is_empty()
            || task
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        matches_search && self.category.matches(task) && self.status.matches(task)
    }

    /// Keep only matching tasks, preserving order.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Deadline,
    Title,
    Category,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreatedAt => write!(f, "created"),
            Self::Deadline => write!(f, "deadline"),
            Self::Title => write!(f, "title"),
            Self::Category => write!(f, "category"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" | "createdat" | "created-at" => Ok(Self::CreatedAt),
            "deadline" => Ok(Self::Deadline),
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            _ => Err(ClientError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ClientError::InvalidSortOrder {
                order: s.to_string(),
            }),
        }
    }
}

/// Sort by a single key, unstable, no secondary key. Dates compare as
/// datetimes, strings lexically, categories by display name. Tasks missing
/// the key's value go last under both orders.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, order: SortOrder) {
    use std::cmp::Ordering;

    let flip = |ordering: Ordering| match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    tasks.sort_unstable_by(|a, b| match key {
        SortKey::CreatedAt => flip(a.created_at.cmp(&b.created_at)),
        SortKey::Title => flip(a.title.cmp(&b.title)),
        SortKey::Category => flip(a.category.name().cmp(b.category.name())),
        SortKey::Deadline => match (a.deadline, b.deadline) {
            (Some(a), Some(b)) => flip(a.cmp(&b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
}

/// Aggregate counts over the full task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.is_completed).count(),
            pending: tasks.iter().filter(|t| !t.is_completed).count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(now)).count(),
        }
    }
}

/// The most recently created tasks, newest first.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sort_tasks(&mut sorted, SortKey::CreatedAt, SortOrder::Desc);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
    }

    fn task(id: &str, title: &str, category: Category, done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            category,
            is_completed: done,
            deadline: None,
            reminder: None,
            created_at: at(1),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            Task {
                deadline: Some(at(20)),
                created_at: at(3),
                ..task("1", "Buy milk", Category::Personal, false)
            },
            Task {
                deadline: Some(at(5)),
                created_at: at(1),
                ..task("2", "Write report", Category::Work, false)
            },
            Task {
                created_at: at(2),
                ..task("3", "Read chapter 4", Category::Study, true)
            },
        ]
    }

    #[test]
    fn test_filter_is_conjunction_of_all_three() {
        let filter = TaskFilter {
            search: "r".to_string(),
            category: CategoryFilter::Only(Category::Work),
            status: StatusFilter::Pending,
        };

        let kept = filter.apply(sample());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Write report");
    }

    #[test]
    fn test_filter_exactly_matches_predicates() {
        let tasks = sample();
        let filter = TaskFilter {
            search: "e".to_string(),
            category: CategoryFilter::All,
            status: StatusFilter::All,
        };

        let kept = filter.apply(tasks.clone());
        for task in &tasks {
            let expected = task.title.to_lowercase().contains('e');
            assert_eq!(kept.iter().any(|k| k.id == task.id), expected);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = TaskFilter {
            search: "BUY".to_string(),
            ..TaskFilter::default()
        };

        let kept = filter.apply(sample());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Buy milk");
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        assert_eq!(TaskFilter::default().apply(sample()).len(), 3);
    }

    #[test]
    fn test_status_filter() {
        let completed = TaskFilter {
            status: StatusFilter::Completed,
            ..TaskFilter::default()
        };
        let kept = completed.apply(sample());
        assert_eq!(kept.len(), 1);
        assert!(kept[0].is_completed);
    }

    #[test]
    fn test_sort_by_created_monotonic() {
        let mut tasks = sample();
        sort_tasks(&mut tasks, SortKey::CreatedAt, SortOrder::Asc);
        assert!(tasks.windows(2).all(|w| w[0].created_at <= w[1].created_at));

        sort_tasks(&mut tasks, SortKey::CreatedAt, SortOrder::Desc);
        assert!(tasks.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_sort_by_title_lexical() {
        let mut tasks = sample();
        sort_tasks(&mut tasks, SortKey::Title, SortOrder::Asc);
        let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Buy milk", "Read chapter 4", "Write report"]);
    }

    #[test]
    fn test_sort_by_category_uses_display_name() {
        let mut tasks = vec![
            task("1", "a", Category::Work, false),
            task("2", "b", Category::Other, false),
            task("3", "c", Category::Study, false),
            task("4", "d", Category::Personal, false),
        ];
        sort_tasks(&mut tasks, SortKey::Category, SortOrder::Asc);
        let names: Vec<_> = tasks.iter().map(|t| t.category.name()).collect();
        assert_eq!(names, ["Other", "Personal", "Study", "Work"]);
    }

    #[test]
    fn test_sort_missing_deadline_goes_last_both_orders() {
        let mut tasks = sample();
        sort_tasks(&mut tasks, SortKey::Deadline, SortOrder::Asc);
        assert_eq!(tasks[0].id, "2");
        assert!(tasks.last().unwrap().deadline.is_none());

        sort_tasks(&mut tasks, SortKey::Deadline, SortOrder::Desc);
        assert_eq!(tasks[0].id, "1");
        assert!(tasks.last().unwrap().deadline.is_none());
    }

    #[test]
    fn test_stats_counts() {
        let stats = TaskStats::compute(&sample(), at(10));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
        // task 2's deadline (day 5) is past day 10 and it is pending
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_toggle_moves_between_counts() {
        let mut tasks = sample();
        let before = TaskStats::compute(&tasks, at(1));

        tasks[0].is_completed = true;
        let after = TaskStats::compute(&tasks, at(1));

        assert_eq!(after.total, before.total);
        assert_eq!(after.completed, before.completed + 1);
        assert_eq!(after.pending, before.pending - 1);
    }

    #[test]
    fn test_recent_tasks_newest_first_capped() {
        let recent = recent_tasks(&sample(), 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "1");
        assert_eq!(recent[1].id, "3");
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Completed".parse::<StatusFilter>().unwrap(),
            StatusFilter::Completed
        );
        assert_eq!(
            "work".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Work)
        );
        assert_eq!("deadline".parse::<SortKey>().unwrap(), SortKey::Deadline);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("upwards".parse::<SortOrder>().is_err());
    }
}
