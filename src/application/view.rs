use std::cmp::Reverse;

use crate::domain::todo::{Priority, Todo};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the order the todos came in.
    #[default]
    Unset,
    HighestFirst,
    LowestFirst,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Unset => "All options",
            SortOrder::HighestFirst => "Highest priority",
            SortOrder::LowestFirst => "Lowest priority",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortOrder::Unset => SortOrder::HighestFirst,
            SortOrder::HighestFirst => SortOrder::LowestFirst,
            SortOrder::LowestFirst => SortOrder::Unset,
        }
    }
}

/// Per-card view state. Sort and filter only apply while `show_filters` is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_filters: bool,
    pub sort: SortOrder,
    pub filter: Option<Priority>,
}

impl ViewOptions {
    /// Cycles the filter through all, High, Medium, Low.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Priority::High),
            Some(Priority::Low) => None,
            Some(p) => Some(p.next()),
        };
    }
}

pub fn sort_by_priority(todos: &[Todo], order: SortOrder) -> Vec<&Todo> {
    let mut sorted: Vec<&Todo> = todos.iter().collect();
    match order {
        SortOrder::Unset => {}
        SortOrder::HighestFirst => sorted.sort_by_key(|t| t.priority.rank()),
        SortOrder::LowestFirst => sorted.sort_by_key(|t| Reverse(t.priority.rank())),
    }
    sorted
}

pub fn filter_by_priority(todos: Vec<&Todo>, filter: Option<Priority>) -> Vec<&Todo> {
    match filter {
        None => todos,
        Some(priority) => todos.into_iter().filter(|t| t.priority == priority).collect(),
    }
}

/// Todos as a section card shows them: sorted, then filtered.
pub fn visible_todos<'a>(todos: &'a [Todo], options: &ViewOptions) -> Vec<&'a Todo> {
    if !options.show_filters {
        return todos.iter().collect();
    }
    filter_by_priority(sort_by_priority(todos, options.sort), options.filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::TodoId;

    fn todo(id: &str, priority: Priority) -> Todo {
        Todo { id: TodoId(id.into()), name: id.into(), description: "desc".into(), is_done: false, priority, deadline: 0 }
    }

    fn ids(todos: &[&Todo]) -> Vec<String> { todos.iter().map(|t| t.id.0.clone()).collect() }

    #[test]
    fn highest_first_orders_high_medium_low() {
        let todos = vec![todo("l", Priority::Low), todo("h", Priority::High), todo("m", Priority::Medium)];
        assert_eq!(ids(&sort_by_priority(&todos, SortOrder::HighestFirst)), ["h", "m", "l"]);
        assert_eq!(ids(&sort_by_priority(&todos, SortOrder::LowestFirst)), ["l", "m", "h"]);
    }

    #[test]
    fn lowest_first_is_exact_reverse_for_distinct_priorities() {
        let todos = vec![todo("m", Priority::Medium), todo("l", Priority::Low), todo("h", Priority::High)];
        let mut highest = ids(&sort_by_priority(&todos, SortOrder::HighestFirst));
        highest.reverse();
        assert_eq!(highest, ids(&sort_by_priority(&todos, SortOrder::LowestFirst)));
    }

    #[test]
    fn unset_sort_preserves_input_order_and_sort_is_stable() {
        let todos = vec![todo("a", Priority::Low), todo("b", Priority::High), todo("c", Priority::Low), todo("d", Priority::High)];
        assert_eq!(ids(&sort_by_priority(&todos, SortOrder::Unset)), ["a", "b", "c", "d"]);
        assert_eq!(ids(&sort_by_priority(&todos, SortOrder::HighestFirst)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn filter_keeps_exact_matches_in_order() {
        let todos = vec![todo("a", Priority::Medium), todo("b", Priority::High), todo("c", Priority::Medium)];
        let all: Vec<&Todo> = todos.iter().collect();
        assert_eq!(ids(&filter_by_priority(all.clone(), Some(Priority::Medium))), ["a", "c"]);
        assert_eq!(ids(&filter_by_priority(all.clone(), Some(Priority::Low))), Vec::<String>::new());
        assert_eq!(ids(&filter_by_priority(all, None)), ["a", "b", "c"]);
    }

    #[test]
    fn transforms_only_apply_while_filters_are_shown() {
        let todos = vec![todo("l", Priority::Low), todo("h", Priority::High)];
        let mut options = ViewOptions { show_filters: false, sort: SortOrder::HighestFirst, filter: Some(Priority::High) };
        assert_eq!(ids(&visible_todos(&todos, &options)), ["l", "h"]);
        options.show_filters = true;
        assert_eq!(ids(&visible_todos(&todos, &options)), ["h"]);
    }

    #[test]
    fn filter_cycles_back_to_all() {
        let mut options = ViewOptions::default();
        let seen: Vec<Option<Priority>> = (0..4).map(|_| { options.cycle_filter(); options.filter }).collect();
        assert_eq!(seen, [Some(Priority::High), Some(Priority::Medium), Some(Priority::Low), None]);
    }
}
