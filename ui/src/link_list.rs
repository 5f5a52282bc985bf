//! # Ordered link-list editing
//!
//! The one real invariant this codebase owns: within a form session the
//! draft links form a dense, zero-based sequence whose `position` values
//! always equal their array indices. Position is *derived* — the user never
//! sets it directly, every structural edit recomputes it from array order —
//! so duplicate or gapped positions can never reach the backend.
//!
//! Empty drafts are tolerated indefinitely while editing;
//! [`LinkListEditor::to_submittable`] is the single place they are filtered
//! out, right before a save.

use api::{Link, LinkPayload};

/// One in-progress link row. No `id`: drafts are client-side only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub position: i32,
}

/// Direction for [`LinkListEditor::move_link`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Ordered sequence of link drafts for a single form session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkListEditor {
    entries: Vec<LinkDraft>,
}

impl LinkListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed drafts from fetched links. Callers pass links already in display
    /// order; positions are re-stamped to the array index regardless, so a
    /// backend that handed out gapped positions still yields a dense draft
    /// sequence.
    pub fn from_links(links: &[Link]) -> Self {
        let entries = links
            .iter()
            .enumerate()
            .map(|(i, link)| LinkDraft {
                title: link.title.clone(),
                url: link.url.clone(),
                position: i as i32,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LinkDraft] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new empty draft at the end. No upper bound.
    pub fn add(&mut self) {
        let position = self.entries.len() as i32;
        self.entries.push(LinkDraft {
            position,
            ..Default::default()
        });
    }

    /// Set the title of the draft at `index`. Out of range is a silent
    /// no-op; the views only hand out live indices.
    pub fn set_title(&mut self, index: usize, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.title = value.into();
            entry.position = index as i32;
        }
    }

    /// Set the url of the draft at `index`. Same range behavior as
    /// [`set_title`](Self::set_title).
    pub fn set_url(&mut self, index: usize, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.url = value.into();
            entry.position = index as i32;
        }
    }

    /// Delete the draft at `index`; the rest keep their relative order and
    /// are renumbered.
    pub fn remove(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        self.renumber();
    }

    /// Swap the draft at `index` with its neighbor. Moving the first entry
    /// up or the last entry down is a boundary no-op, not an error.
    pub fn move_link(&mut self, index: usize, direction: MoveDirection) {
        if index >= self.entries.len() {
            return;
        }
        let neighbor = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.entries.len() {
                    return;
                }
                index + 1
            }
        };
        self.entries.swap(index, neighbor);
        self.renumber();
    }

    /// The drafts worth saving: non-empty title AND non-empty url, in
    /// current order. Invalid drafts are dropped here and nowhere else.
    pub fn to_submittable(&self) -> Vec<LinkPayload> {
        self.entries
            .iter()
            .filter(|e| !e.title.is_empty() && !e.url.is_empty())
            .map(|e| LinkPayload {
                title: e.title.clone(),
                url: e.url.clone(),
                position: e.position,
            })
            .collect()
    }

    fn renumber(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.position = i as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(editor: &LinkListEditor) -> Vec<i32> {
        editor.entries().iter().map(|e| e.position).collect()
    }

    fn titled(editor: &LinkListEditor) -> Vec<&str> {
        editor.entries().iter().map(|e| e.title.as_str()).collect()
    }

    fn editor_with(titles: &[&str]) -> LinkListEditor {
        let mut editor = LinkListEditor::new();
        for (i, title) in titles.iter().enumerate() {
            editor.add();
            editor.set_title(i, *title);
            editor.set_url(i, format!("https://{title}.example"));
        }
        editor
    }

    #[test]
    fn add_appends_with_position_equal_to_length() {
        let mut editor = LinkListEditor::new();
        editor.add();
        editor.add();
        editor.add();
        assert_eq!(positions(&editor), vec![0, 1, 2]);
        assert!(editor.entries().iter().all(|e| e.title.is_empty()));
    }

    #[test]
    fn positions_match_indices_after_any_sequence_of_edits() {
        let mut editor = editor_with(&["a", "b", "c", "d"]);
        editor.remove(1);
        assert_eq!(positions(&editor), vec![0, 1, 2]);
        editor.move_link(2, MoveDirection::Up);
        assert_eq!(positions(&editor), vec![0, 1, 2]);
        editor.add();
        assert_eq!(positions(&editor), vec![0, 1, 2, 3]);
        editor.move_link(0, MoveDirection::Down);
        assert_eq!(positions(&editor), vec![0, 1, 2, 3]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.remove(0);
        assert_eq!(titled(&editor), vec!["b", "c"]);
        assert_eq!(positions(&editor), vec![0, 1]);
    }

    #[test]
    fn remove_only_link_leaves_dense_sequence() {
        // load [0,1], remove(0) -> single link at position 0
        let links = vec![
            api::Link {
                id: 1,
                title: "a".into(),
                url: "https://a".into(),
                position: 0,
                click_count: 0,
            },
            api::Link {
                id: 2,
                title: "b".into(),
                url: "https://b".into(),
                position: 1,
                click_count: 0,
            },
        ];
        let mut editor = LinkListEditor::from_links(&links);
        editor.remove(0);
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.entries()[0].title, "b");
        assert_eq!(editor.entries()[0].position, 0);
    }

    #[test]
    fn move_swaps_with_neighbor() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.move_link(2, MoveDirection::Up);
        assert_eq!(titled(&editor), vec!["a", "c", "b"]);
        editor.move_link(0, MoveDirection::Down);
        assert_eq!(titled(&editor), vec!["c", "a", "b"]);
        assert_eq!(positions(&editor), vec![0, 1, 2]);
    }

    #[test]
    fn move_at_boundaries_is_a_noop() {
        let mut editor = editor_with(&["a", "b", "c"]);
        let before = editor.clone();
        editor.move_link(0, MoveDirection::Up);
        assert_eq!(editor, before);
        editor.move_link(2, MoveDirection::Down);
        assert_eq!(editor, before);
    }

    #[test]
    fn out_of_range_operations_are_silent_noops() {
        let mut editor = editor_with(&["a"]);
        let before = editor.clone();
        editor.set_title(5, "x");
        editor.set_url(5, "x");
        editor.remove(5);
        editor.move_link(5, MoveDirection::Up);
        assert_eq!(editor, before);
    }

    #[test]
    fn to_submittable_drops_incomplete_entries_without_reordering() {
        let mut editor = LinkListEditor::new();
        editor.add();
        editor.set_title(0, "Blog");
        editor.set_url(0, "https://blog.example");
        editor.add(); // stays empty
        editor.add();
        editor.set_title(2, "no url"); // url missing
        editor.add();
        editor.set_url(3, "https://untitled.example"); // title missing
        editor.add();
        editor.set_title(4, "Shop");
        editor.set_url(4, "https://shop.example");

        let payload = editor.to_submittable();
        let titles: Vec<&str> = payload.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Blog", "Shop"]);
        // editor still holds all five drafts
        assert_eq!(editor.len(), 5);
    }

    #[test]
    fn from_links_restamps_gapped_positions() {
        let links = vec![
            api::Link {
                id: 1,
                title: "a".into(),
                url: "https://a".into(),
                position: 3,
                click_count: 0,
            },
            api::Link {
                id: 2,
                title: "b".into(),
                url: "https://b".into(),
                position: 7,
                click_count: 0,
            },
        ];
        let editor = LinkListEditor::from_links(&links);
        assert_eq!(positions(&editor), vec![0, 1]);
        assert_eq!(titled(&editor), vec!["a", "b"]);
    }
}
