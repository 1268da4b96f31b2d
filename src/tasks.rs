//! Deferred task queue.
//!
//! A notification must not be destroyed from inside one of its own event
//! handlers. Handlers post a task instead, and the owner of the state drains
//! the queue once the handler has returned. Tasks run in post order.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, error::TryRecvError, unbounded_channel};

/// A zero-argument callback, run later against the state that owns the queue
pub type Task<C> = Box<dyn FnOnce(&mut C)>;

pub struct PostedTask<C> {
    pub label: &'static str,
    pub task: Task<C>,
}

impl<C> std::fmt::Debug for PostedTask<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostedTask").field("label", &self.label).finish()
    }
}

/// Cloneable handle for posting tasks onto a [`TaskQueue`]
pub struct TaskPoster<C> {
    tx: UnboundedSender<PostedTask<C>>,
}

impl<C> Clone for TaskPoster<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C> TaskPoster<C> {
    pub fn post(&self, label: &'static str, task: impl FnOnce(&mut C) + 'static) {
        tracing::trace!(label, "posting task");
        if self
            .tx
            .send(PostedTask {
                label,
                task: Box::new(task),
            })
            .is_err()
        {
            tracing::warn!(label, "task queue is gone, dropping task");
        }
    }
}

pub struct TaskQueue<C> {
    poster: TaskPoster<C>,
    rx: UnboundedReceiver<PostedTask<C>>,
}

impl<C> TaskQueue<C> {
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            poster: TaskPoster { tx },
            rx,
        }
    }

    pub fn poster(&self) -> TaskPoster<C> {
        self.poster.clone()
    }

    pub fn post(&self, label: &'static str, task: impl FnOnce(&mut C) + 'static) {
        self.poster.post(label, task);
    }

    /// Next task in post order, if any.
    pub fn pop(&mut self) -> Option<PostedTask<C>> {
        match self.rx.try_recv() {
            Ok(task) => Some(task),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl<C> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_run_in_post_order() {
        let mut queue: TaskQueue<Vec<u32>> = TaskQueue::new();
        queue.post("first", |v| v.push(1));
        queue.poster().post("second", |v| v.push(2));
        queue.post("third", |v| v.push(3));
        assert_eq!(queue.len(), 3);

        let mut out = Vec::new();
        let mut labels = Vec::new();
        while let Some(posted) = queue.pop() {
            labels.push(posted.label);
            (posted.task)(&mut out);
        }

        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(labels, vec!["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_posting_does_not_run() {
        let mut queue: TaskQueue<u32> = TaskQueue::new();
        let mut counter = 0;
        queue.post("inc", |c| *c += 1);
        assert_eq!(counter, 0);

        let posted = queue.pop().unwrap();
        (posted.task)(&mut counter);
        assert_eq!(counter, 1);
        assert!(queue.pop().is_none());
    }
}
