use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pathplanner_designer::history::{HistoryStatus, UndoManager};

#[test]
fn test_undo_manager_creation() {
    let manager: UndoManager<i32> = UndoManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_count(), 0);
    assert_eq!(manager.redo_count(), 0);
    assert_eq!(manager.max_history(), 50);
}

#[test]
fn test_single_state_cannot_undo() {
    let mut manager = UndoManager::new(10);
    manager.save_state(&1, "initial");
    assert!(!manager.can_undo());
    assert_eq!(manager.undo(), None);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_undo_returns_previous_state() {
    let mut manager = UndoManager::new(10);
    manager.save_state(&1, "initial");
    manager.save_state(&2, "edit a");
    manager.save_state(&3, "edit b");

    assert_eq!(manager.undo_count(), 2);
    assert_eq!(manager.undo_description(), Some("edit b"));
    assert_eq!(manager.undo(), Some(2));
    assert_eq!(manager.undo(), Some(1));
    assert_eq!(manager.undo(), None);
    assert_eq!(manager.redo_count(), 2);
}

#[test]
fn test_redo_after_undo() {
    let mut manager = UndoManager::new(10);
    manager.save_state(&"a".to_string(), "initial");
    manager.save_state(&"b".to_string(), "edit");

    assert_eq!(manager.undo().as_deref(), Some("a"));
    assert_eq!(manager.redo_description(), Some("edit"));
    assert_eq!(manager.redo().as_deref(), Some("b"));
    assert!(!manager.can_redo());
    assert_eq!(manager.redo(), None);
}

#[test]
fn test_new_save_clears_redo() {
    let mut manager = UndoManager::new(10);
    manager.save_state(&1, "initial");
    manager.save_state(&2, "edit");
    manager.undo();
    assert!(manager.can_redo());

    manager.save_state(&5, "branch");
    assert!(!manager.can_redo());
    assert_eq!(manager.undo(), Some(1));
}

#[test]
fn test_max_history_trims_oldest() {
    let mut manager = UndoManager::new(3);
    for i in 0..10 {
        manager.save_state(&i, format!("step {}", i));
    }
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.undo(), Some(8));
    assert_eq!(manager.undo(), Some(7));
    assert_eq!(manager.undo(), None);
}

#[test]
fn test_snapshots_are_independent() {
    let mut manager = UndoManager::new(10);
    let mut live = vec![1, 2, 3];
    manager.save_state(&live, "initial");
    live.push(4);
    manager.save_state(&live, "push");
    live.clear();

    assert_eq!(manager.undo(), Some(vec![1, 2, 3]));
    assert_eq!(manager.redo(), Some(vec![1, 2, 3, 4]));
}

#[test]
fn test_clear() {
    let mut manager = UndoManager::new(10);
    manager.save_state(&1, "a");
    manager.save_state(&2, "b");
    manager.clear();
    assert!(manager.is_empty());
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert!(manager.current().is_none());
}

#[test]
fn test_observers_notified() {
    let mut manager = UndoManager::new(10);
    let calls = Arc::new(AtomicUsize::new(0));
    let last: Arc<Mutex<Option<HistoryStatus>>> = Arc::new(Mutex::new(None));

    let calls_clone = Arc::clone(&calls);
    let last_clone = Arc::clone(&last);
    let id = manager.on_change(move |status| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        *last_clone.lock().unwrap() = Some(status.clone());
        Ok(())
    });

    manager.save_state(&1, "a");
    manager.save_state(&2, "b");
    manager.undo();
    manager.redo();
    manager.clear();
    assert_eq!(calls.load(Ordering::SeqCst), 5);
    assert_eq!(last.lock().unwrap().clone(), Some(HistoryStatus::default()));

    // No-op undo does not notify
    manager.undo();
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    assert!(manager.remove_observer(id));
    assert!(!manager.remove_observer(id));
    manager.save_state(&3, "c");
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn test_failing_observers_do_not_abort() {
    let mut manager = UndoManager::new(10);
    let calls = Arc::new(AtomicUsize::new(0));

    manager.on_change(|_| Err(anyhow::anyhow!("observer failed")));
    manager.on_change(|_| panic!("observer panicked"));
    let calls_clone = Arc::clone(&calls);
    manager.on_change(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    manager.save_state(&1, "a");
    manager.save_state(&2, "b");
    assert_eq!(manager.undo(), Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(manager.observer_count(), 3);
}

#[test]
fn test_batch_records_single_entry() {
    let mut manager = UndoManager::new(10);
    let mut state = vec![0];
    manager.save_state(&state, "initial");

    let result: Result<usize, String> = manager.batch(&mut state, "bulk", |s| {
        s.push(1);
        s.push(2);
        Ok(s.len())
    });
    assert_eq!(result, Ok(3));
    assert_eq!(manager.undo_count(), 1);
    assert_eq!(manager.undo_description(), Some("bulk"));
    assert_eq!(manager.undo(), Some(vec![0]));
}

#[test]
fn test_batch_rolls_back_on_error() {
    let mut manager = UndoManager::new(10);
    let mut state = vec![0];
    manager.save_state(&state, "initial");

    let result: Result<(), String> = manager.batch(&mut state, "bulk", |s| {
        s.push(1);
        Err("nope".to_string())
    });
    assert!(result.is_err());
    assert_eq!(state, vec![0]);
    assert_eq!(manager.undo_count(), 0);
}
