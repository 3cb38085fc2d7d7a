use crate::model::task::Task;

/// Filter tasks whose content contains `term`, case-insensitively.
///
/// An empty term keeps everything. Order is preserved, so the result can be
/// windowed without re-sorting.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    if term.is_empty() {
        return tasks.iter().collect();
    }
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.content.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, "Buy groceries"),
            Task::new(2, "Call the dentist"),
            Task::new(3, "buy stamps"),
            Task::new(4, "Groceries list: müsli"),
        ]
    }

    // --- Matching ---

    #[test]
    fn test_filter_case_insensitive() {
        let tasks = sample_tasks();
        let hits = filter_tasks(&tasks, "BUY");
        let ids: Vec<_> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_substring_anywhere() {
        let tasks = sample_tasks();
        let hits = filter_tasks(&tasks, "roceri");
        let ids: Vec<_> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_filter_non_ascii() {
        let tasks = sample_tasks();
        let hits = filter_tasks(&tasks, "MÜSLI");
        let ids: Vec<_> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_filter_no_matches() {
        let tasks = sample_tasks();
        assert!(filter_tasks(&tasks, "zzz").is_empty());
    }

    // --- Pass-through ---

    #[test]
    fn test_empty_term_keeps_all_in_order() {
        let tasks = sample_tasks();
        let hits = filter_tasks(&tasks, "");
        let ids: Vec<_> = hits.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter_tasks(&[], "x").is_empty());
        assert!(filter_tasks(&[], "").is_empty());
    }
}
