use crate::core::{NotificationBackend, Permission, Reminder};
use crate::notifier::NotifyError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Fake notification backend for testing.
///
/// Permission behaves like the platform flag: readable at any time and
/// mutated only by the (fake) permission prompt.
pub struct FakeBackend {
    available: bool,
    permission: Arc<Mutex<Permission>>,
    prompt_answer: Permission,
    fail_delivery: bool,
    request_count: Arc<Mutex<u32>>,
    delivered: Arc<Mutex<Vec<Reminder>>>,
}

impl FakeBackend {
    pub fn new(available: bool, permission: Permission) -> Self {
        Self {
            available,
            permission: Arc::new(Mutex::new(permission)),
            prompt_answer: Permission::Default,
            fail_delivery: false,
            request_count: Arc::new(Mutex::new(0)),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets what the fake user answers when the permission prompt appears.
    pub fn with_prompt_answer(mut self, answer: Permission) -> Self {
        self.prompt_answer = answer;
        self
    }

    /// Makes every delivery attempt fail.
    pub fn failing_delivery(mut self) -> Self {
        self.fail_delivery = true;
        self
    }

    /// The reminders that were "shown".
    pub fn delivered(&self) -> Vec<Reminder> {
        self.delivered.lock().unwrap().clone()
    }

    /// How many times the permission prompt was opened.
    pub fn request_count(&self) -> u32 {
        *self.request_count.lock().unwrap()
    }
}

#[async_trait]
impl NotificationBackend for FakeBackend {
    fn name(&self) -> &str {
        "fake"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn permission(&self) -> Permission {
        if !self.available {
            return Permission::Default;
        }
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Result<Permission, NotifyError> {
        if !self.available {
            return Err(NotifyError::Unavailable);
        }
        *self.request_count.lock().unwrap() += 1;
        if self.prompt_answer != Permission::Default {
            *self.permission.lock().unwrap() = self.prompt_answer;
        }
        Ok(self.prompt_answer)
    }

    async fn deliver(&self, reminder: &Reminder) -> Result<(), NotifyError> {
        if !self.available {
            return Err(NotifyError::Unavailable);
        }
        if self.fail_delivery {
            return Err(NotifyError::Backend("fake delivery failure".to_string()));
        }
        self.delivered.lock().unwrap().push(reminder.clone());
        Ok(())
    }
}
