//! Overview Aggregation
//!
//! Pure projections over the three fetched collections: totals, task
//! completion, and per-user series for the two charts.

use serde::Serialize;

use crate::models::{Post, Todo, User};

/// Totals shown on the stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub users: usize,
    pub posts: usize,
    pub todos: usize,
    pub completed_todos: usize,
}

impl OverviewStats {
    pub fn completion_rate(&self) -> Option<f64> {
        completion_rate(self.completed_todos, self.todos)
    }
}

/// One point of the activity line chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserActivity {
    pub name: String,
    pub posts: usize,
    pub todos: usize,
}

/// One bar of the posts chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPosts {
    pub name: String,
    pub posts: usize,
}

/// How many users each chart covers, taken from the front of the user list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLimits {
    pub activity_users: usize,
    pub posts_users: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self { activity_users: 6, posts_users: 5 }
    }
}

/// Everything the dashboard home renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overview {
    pub stats: OverviewStats,
    pub activity: Vec<UserActivity>,
    pub posts_by_user: Vec<UserPosts>,
}

impl Overview {
    pub fn derive(users: &[User], posts: &[Post], todos: &[Todo], limits: ChartLimits) -> Self {
        let stats = OverviewStats {
            users: users.len(),
            posts: posts.len(),
            todos: todos.len(),
            completed_todos: todos.iter().filter(|todo| todo.completed).count(),
        };

        let activity = users
            .iter()
            .take(limits.activity_users)
            .map(|user| UserActivity {
                name: user.first_name().to_string(),
                posts: posts_of(posts, user.id),
                todos: todos.iter().filter(|todo| todo.user_id == user.id).count(),
            })
            .collect();

        let posts_by_user = users
            .iter()
            .take(limits.posts_users)
            .map(|user| UserPosts {
                name: user.handle().to_string(),
                posts: posts_of(posts, user.id),
            })
            .collect();

        Self { stats, activity, posts_by_user }
    }

    pub fn completion_rate(&self) -> Option<f64> {
        self.stats.completion_rate()
    }
}

fn posts_of(posts: &[Post], user_id: u32) -> usize {
    posts.iter().filter(|post| post.user_id == user_id).count()
}

/// Percentage of completed tasks, rounded to one decimal. `None` when there are no tasks.
pub fn completion_rate(completed: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let percent = completed as f64 / total as f64 * 100.0;
    Some((percent * 10.0).round() / 10.0)
}

/// Stat card text: `66.7%`, or an em dash when undefined
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate),
        None => "—".to_string(),
    }
}
