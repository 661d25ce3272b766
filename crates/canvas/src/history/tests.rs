use super::History;

#[test]
fn pops_newest_first() {
	let mut history = History::new(3);
	history.push(1);
	history.push(2);
	assert_eq!(history.peek(), Some(&2));
	assert_eq!(history.pop(), Some(2));
	assert_eq!(history.pop(), Some(1));
	assert_eq!(history.pop(), None);
}

#[test]
fn full_history_evicts_oldest() {
	let mut history = History::new(2);
	assert_eq!(history.push('a'), None);
	assert_eq!(history.push('b'), None);
	assert_eq!(history.push('c'), Some('a'));
	assert_eq!(history.len(), 2);
	assert_eq!(history.pop(), Some('c'));
	assert_eq!(history.pop(), Some('b'));
	assert!(history.is_empty());
}

#[test]
fn default_depth_is_twenty() {
	let mut history = History::default();
	for i in 0..25 {
		history.push(i);
	}
	assert_eq!(history.depth(), 20);
	assert_eq!(history.len(), 20);
	assert_eq!(history.pop(), Some(24));

	let mut oldest = None;
	while let Some(i) = history.pop() {
		oldest = Some(i);
	}
	assert_eq!(oldest, Some(5));
}

#[test]
fn zero_depth_keeps_nothing() {
	let mut history = History::new(0);
	assert_eq!(history.push(7), Some(7));
	assert!(history.is_empty());
	assert_eq!(history.pop(), None);
}

#[test]
fn clear_empties_history() {
	let mut history = History::new(4);
	history.push(1);
	history.push(2);
	history.clear();
	assert!(history.is_empty());
	assert_eq!(history.depth(), 4);
}
