use super::services::Notification;

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Notification>,
}

impl ToastQueue {
    pub fn push(mut self, notification: Notification, max: usize) -> Self {
        self.items.push(notification);
        if self.items.len() > max {
            let overflow = self.items.len() - max;
            self.items.drain(..overflow);
        }
        self
    }

    pub fn dismiss(mut self, id: u64) -> Self {
        self.items.retain(|n| n.id != id);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_drops_oldest_over_limit() {
        let first = Notification::success("one", "");
        let first_id = first.id;
        let queue = ToastQueue::default()
            .push(first, 2)
            .push(Notification::success("two", ""), 2)
            .push(Notification::success("three", ""), 2);

        assert_eq!(queue.iter().count(), 2);
        assert!(queue.iter().all(|n| n.id != first_id));
        let titles: Vec<&str> = queue.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let toast = Notification::error("oops", "failed");
        let id = toast.id;
        let queue = ToastQueue::default().push(toast, 3).dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let queue = ToastQueue::default().push(Notification::success("hi", ""), 3);
        assert_eq!(queue.clone().dismiss(u64::MAX), queue);
    }
}
