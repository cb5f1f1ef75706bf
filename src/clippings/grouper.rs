use std::collections::HashMap;

use thiserror::Error;

use crate::config::GroupingMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
	#[error("clipping #{index} is empty and has no title line")]
	EmptyClipping { index: usize },
}

/// Clippings of one book, in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGroup {
	pub title:     String,
	pub clippings: Vec<String>,
}

/// Book groups keyed by title.
///
/// Iteration follows the order in which each title was first inserted.
/// Restarting a title replaces its clippings but keeps its position.
#[derive(Debug, Default)]
pub struct BookGroups {
	groups: Vec<BookGroup>,
	index:  HashMap<String, usize>,
}

impl BookGroups {
	pub fn len(&self) -> usize { self.groups.len() }

	pub fn is_empty(&self) -> bool { self.groups.is_empty() }

	pub fn iter(&self) -> impl Iterator<Item = &BookGroup> { self.groups.iter() }

	pub fn get(&self, title: &str) -> Option<&[String]> {
		self.index.get(title).map(|&i| self.groups[i].clippings.as_slice())
	}

	/// Total number of clippings over all groups.
	pub fn clipping_count(&self) -> usize { self.groups.iter().map(|g| g.clippings.len()).sum() }

	/// Starts a fresh run for `title`, dropping whatever it held before.
	fn restart(&mut self, title: &str) -> &mut Vec<String> {
		let slot = self.slot(title);
		let clippings = &mut self.groups[slot].clippings;
		if !clippings.is_empty() {
			tracing::debug!(title, dropped = clippings.len(), "title reappeared, replacing earlier run");
			clippings.clear();
		}
		clippings
	}

	/// Returns the list for `title`, creating it if needed.
	fn entry(&mut self, title: &str) -> &mut Vec<String> {
		let slot = self.slot(title);
		&mut self.groups[slot].clippings
	}

	fn slot(&mut self, title: &str) -> usize {
		if let Some(&i) = self.index.get(title) {
			return i;
		}
		let i = self.groups.len();
		self.groups.push(BookGroup { title: title.to_string(), clippings: Vec::new() });
		self.index.insert(title.to_string(), i);
		i
	}
}

/// Returns the trimmed first line of a clipping, or `None` for an empty one.
pub fn title_of(clipping: &str) -> Option<&str> { clipping.lines().next().map(str::trim) }

/// Groups clippings by their title line.
///
/// With [`GroupingMode::Adjacent`] a new run starts each time the title differs
/// from the previous clipping's, so `[A, A, B, A]` ends with `A` holding only
/// the last clipping. [`GroupingMode::Global`] collects every clipping of a
/// title.
pub fn group_clippings(clippings: Vec<String>, mode: GroupingMode) -> Result<BookGroups, GroupError> {
	let mut groups = BookGroups::default();
	let mut current: Option<String> = None;

	for (index, clipping) in clippings.into_iter().enumerate() {
		let title = title_of(&clipping).ok_or(GroupError::EmptyClipping { index })?.to_string();

		let list = match mode {
			GroupingMode::Adjacent if current.as_deref() != Some(title.as_str()) => {
				let list = groups.restart(&title);
				current = Some(title);
				list
			}
			_ => groups.entry(&title),
		};
		list.push(clipping);
	}

	tracing::info!(
		groups = groups.len(),
		clippings = groups.clipping_count(),
		mode = mode.as_str(),
		"grouped clippings"
	);
	Ok(groups)
}
