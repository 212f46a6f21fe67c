//! Board projection: three fixed columns of [`Task`] derived from the site
//! list. The board is disposable view state; after a mutation it is thrown
//! away and rebuilt from the sites.

pub mod reducer;

use crate::models::site::Site;
use crate::models::status::Status;
use crate::models::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl Board {
    /// Project an ordered site list (status, position) into columns.
    pub fn from_sites(sites: &[Site]) -> Self {
        let mut board = Board::default();
        for site in sites {
            board
                .column_mut(site.status)
                .push(Task::from_site(site));
        }
        board
    }

    pub fn column(&self, status: Status) -> &Vec<Task> {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    pub fn column_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    /// Which column a task currently lives in.
    pub fn column_of(&self, task_id: &str) -> Option<Status> {
        for status in Status::ALL {
            if self.column(status).iter().any(|t| t.id == task_id) {
                return Some(status);
            }
        }
        None
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        for status in Status::ALL {
            if let Some(t) = self.column(status).iter().find(|t| t.id == task_id) {
                return Some(t);
            }
        }
        None
    }

    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }
}
