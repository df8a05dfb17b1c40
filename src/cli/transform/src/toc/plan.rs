/* src/cli/transform/src/toc/plan.rs */

// Grouping phase of the chapter TOC reduction. A pure fold over the
// classified entries; nothing here touches the tree.

/// Role of one sidebar entry, decided once from its link's classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
  Part,
  Section,
  HomeLink,
  Intro,
  Unknown(String),
}

impl EntryKind {
  pub fn from_classes(classes: &[String]) -> Self {
    let has = |name: &str| classes.iter().any(|c| c == name);
    if has("linkhome") {
      Self::HomeLink
    } else if has("tocpart") {
      Self::Part
    } else if has("tocsection") {
      Self::Section
    } else {
      Self::Unknown(classes.join(" "))
    }
  }
}

/// What the planner needs to know about an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
  pub kind: EntryKind,
  pub fragment: String,
}

/// A part and the indices of the sections filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocGroup {
  pub part: usize,
  pub children: Vec<usize>,
}

/// Result of grouping. All indices refer to positions in the entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocPlan {
  pub groups: Vec<TocGroup>,
  /// Index into `groups` of the chapter being rendered.
  pub current_group: Option<usize>,
  /// The single entry whose fragment matched the page.
  pub current_entry: Option<usize>,
  /// Sections seen before any part.
  pub orphans: Vec<usize>,
}

impl TocPlan {
  pub fn current(&self) -> Option<&TocGroup> {
    self.current_group.and_then(|g| self.groups.get(g))
  }

  /// Sections to remove: every child of every group except the current one.
  /// Without a current group nothing is collapsed.
  pub fn collapsed_sections(&self) -> impl Iterator<Item = usize> + '_ {
    let current = self.current_group;
    self
      .groups
      .iter()
      .enumerate()
      .filter(move |(g, _)| current.is_some_and(|c| c != *g))
      .flat_map(|(_, group)| group.children.iter().copied())
  }
}

#[derive(Default)]
struct Fold {
  last_part: Option<usize>,
  plan: TocPlan,
}

impl Fold {
  fn mark_current(&mut self, group: usize, entry: usize) {
    // First match wins; the sidebar lists every page once.
    if self.plan.current_entry.is_none() {
      self.plan.current_group = Some(group);
      self.plan.current_entry = Some(entry);
    }
  }

  fn step(mut self, index: usize, key: &EntryKey, file_id: &str) -> Self {
    match key.kind {
      EntryKind::Part => {
        self.plan.groups.push(TocGroup { part: index, children: Vec::new() });
        let group = self.plan.groups.len() - 1;
        self.last_part = Some(group);
        if key.fragment == file_id {
          self.mark_current(group, index);
        }
      }
      EntryKind::Section => match self.last_part {
        Some(group) => {
          self.plan.groups[group].children.push(index);
          if key.fragment == file_id {
            self.mark_current(group, index);
          }
        }
        None => self.plan.orphans.push(index),
      },
      EntryKind::HomeLink | EntryKind::Intro | EntryKind::Unknown(_) => {}
    }
    self
  }
}

/// Group sections under the nearest preceding part and find the entry that
/// matches `file_id`.
pub fn plan_toc<'a>(keys: impl IntoIterator<Item = &'a EntryKey>, file_id: &str) -> TocPlan {
  keys
    .into_iter()
    .enumerate()
    .fold(Fold::default(), |acc, (index, key)| acc.step(index, key, file_id))
    .plan
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(kind: EntryKind, fragment: &str) -> EntryKey {
    EntryKey { kind, fragment: fragment.to_string() }
  }

  #[test]
  fn classify_by_link_class() {
    let kind = |c: &str| EntryKind::from_classes(&[c.to_string()]);
    assert_eq!(kind("tocpart"), EntryKind::Part);
    assert_eq!(kind("tocsection"), EntryKind::Section);
    assert_eq!(kind("linkhome"), EntryKind::HomeLink);
    assert_eq!(kind("tocchapter"), EntryKind::Unknown("tocchapter".into()));
    assert_eq!(EntryKind::from_classes(&[]), EntryKind::Unknown(String::new()));
  }

  #[test]
  fn section_match_selects_parent_group() {
    let keys = vec![
      key(EntryKind::Part, "x"),
      key(EntryKind::Section, "y"),
      key(EntryKind::Section, "z"),
    ];
    let plan = plan_toc(&keys, "y");
    assert_eq!(plan.groups, vec![TocGroup { part: 0, children: vec![1, 2] }]);
    assert_eq!(plan.current_group, Some(0));
    assert_eq!(plan.current_entry, Some(1));
    assert_eq!(plan.collapsed_sections().count(), 0);
  }

  #[test]
  fn part_match_marks_part_itself() {
    let keys = vec![
      key(EntryKind::Part, "a"),
      key(EntryKind::Section, "a1"),
      key(EntryKind::Part, "b"),
      key(EntryKind::Section, "b1"),
      key(EntryKind::Section, "b2"),
    ];
    let plan = plan_toc(&keys, "b");
    assert_eq!(plan.current_group, Some(1));
    assert_eq!(plan.current_entry, Some(2));
    assert_eq!(plan.collapsed_sections().collect::<Vec<_>>(), vec![1]);
  }

  #[test]
  fn non_current_groups_collapse() {
    let keys = vec![
      key(EntryKind::Part, "a"),
      key(EntryKind::Section, "a1"),
      key(EntryKind::Section, "a2"),
      key(EntryKind::Part, "b"),
      key(EntryKind::Section, "b1"),
      key(EntryKind::Part, "c"),
      key(EntryKind::Section, "c1"),
    ];
    let plan = plan_toc(&keys, "b1");
    assert_eq!(plan.current().map(|g| g.part), Some(3));
    assert_eq!(plan.collapsed_sections().collect::<Vec<_>>(), vec![1, 2, 6]);
  }

  #[test]
  fn sections_before_any_part_are_orphans() {
    let keys = vec![key(EntryKind::Section, "s0"), key(EntryKind::Part, "p")];
    let plan = plan_toc(&keys, "s0");
    assert_eq!(plan.orphans, vec![0]);
    assert_eq!(plan.current_group, None);
  }

  #[test]
  fn intro_and_unknown_are_not_grouped() {
    let keys = vec![
      key(EntryKind::Intro, "intro"),
      key(EntryKind::Part, "p"),
      key(EntryKind::Unknown("odd".into()), "u"),
      key(EntryKind::Section, "s"),
    ];
    let plan = plan_toc(&keys, "intro");
    assert_eq!(plan.groups, vec![TocGroup { part: 1, children: vec![3] }]);
    assert_eq!(plan.current_group, None);
  }

  #[test]
  fn no_match_collapses_nothing() {
    let keys = vec![
      key(EntryKind::Part, "a"),
      key(EntryKind::Section, "a1"),
      key(EntryKind::Part, "b"),
      key(EntryKind::Section, "b1"),
    ];
    let plan = plan_toc(&keys, "missing");
    assert!(plan.current().is_none());
    assert_eq!(plan.collapsed_sections().count(), 0);
  }
}
