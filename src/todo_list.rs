//! Todo List Model
//!
//! Ordered list of todos with add/delete/toggle. No framework types here;
//! the reactive store wraps this.

use crate::models::{Todo, TodoId};

/// Todos in insertion order plus the id counter.
///
/// Ids come from a counter that only grows, so an id is never handed out
/// twice even after the highest one is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl TodoList {
    /// Items in display order
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Append a new, not completed todo and return its id
    pub fn add(&mut self, text: impl Into<String>) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(Todo::new(id, text));
        id
    }

    /// Remove the todo with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.items.len() != before
    }

    /// Flip `completed` on the todo with `id`. Returns `false` if there was none.
    pub fn toggle_completed(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::default();
        for text in texts {
            list.add(*text);
        }
        list
    }

    fn ids(list: &TodoList) -> Vec<u32> {
        list.items().iter().map(|todo| todo.id.0).collect()
    }

    #[test]
    fn test_add_assigns_increasing_ids_from_zero() {
        let list = list_of(&["a", "b", "c", "d"]);

        assert_eq!(ids(&list), vec![0, 1, 2, 3]);
        assert!(list.items().iter().all(|todo| !todo.completed));
    }

    #[test]
    fn test_ids_not_reused_after_deleting_highest() {
        let mut list = list_of(&["a", "b", "c"]);

        assert!(list.delete(TodoId(2)));
        let id = list.add("d");

        assert_eq!(id, TodoId(3));
        assert_eq!(ids(&list), vec![0, 1, 3]);
    }

    #[test]
    fn test_ids_not_reused_after_emptying_list() {
        let mut list = list_of(&["a"]);
        list.delete(TodoId(0));
        assert!(list.items().is_empty());

        assert_eq!(list.add("b"), TodoId(1));
    }

    #[test]
    fn test_delete_keeps_order_of_remaining() {
        let mut list = list_of(&["a", "b", "c", "d"]);

        assert!(list.delete(TodoId(1)));

        assert_eq!(ids(&list), vec![0, 2, 3]);
        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();

        assert!(!list.delete(TodoId(7)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut list = list_of(&["a", "b", "c"]);

        assert!(list.toggle_completed(TodoId(1)));

        assert_eq!(list.get(TodoId(0)), Some(&Todo::new(TodoId(0), "a")));
        assert!(list.get(TodoId(1)).unwrap().completed);
        assert_eq!(list.get(TodoId(2)), Some(&Todo::new(TodoId(2), "c")));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();

        list.toggle_completed(TodoId(0));
        list.toggle_completed(TodoId(0));

        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut list = list_of(&["a"]);
        let before = list.clone();

        assert!(!list.toggle_completed(TodoId(3)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_buy_milk_walk_dog_scenario() {
        let mut list = TodoList::default();

        list.add("Buy milk");
        assert_eq!(list.items(), &[Todo::new(TodoId(0), "Buy milk")]);

        list.add("Walk dog");
        assert_eq!(
            list.items(),
            &[Todo::new(TodoId(0), "Buy milk"), Todo::new(TodoId(1), "Walk dog")]
        );

        list.delete(TodoId(0));
        assert_eq!(list.items(), &[Todo::new(TodoId(1), "Walk dog")]);

        list.toggle_completed(TodoId(1));
        assert_eq!(
            list.items(),
            &[Todo {
                id: TodoId(1),
                text: "Walk dog".to_string(),
                completed: true,
            }]
        );
    }
}
