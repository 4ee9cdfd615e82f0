//! redb-backed storage for every entity the API serves.
//!
//! Each public method is one transaction. Rows are postcard-encoded and keyed
//! by a u64 id drawn from a per-table sequence, so iteration order is
//! insertion order.

use redb::{Database, ReadTransaction, ReadableTable, TableDefinition, TableHandle, WriteTransaction};
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, path::Path, sync::Arc};

use crate::{
    attachment::{Attachment, NewAttachment},
    comment::{Comment, NewComment},
    project::{NewProject, Project},
    search_response::SearchResponse,
    store_error::StoreError,
    task::{NewTask, Task},
    task_details_response::TaskDetailsResponse,
    task_priority::TaskPriority,
    task_status::TaskStatus,
    team::{NewTeam, Team},
    team_response::TeamResponse,
    user::{NewUser, User},
};

type Rows = TableDefinition<'static, u64, &'static [u8]>;

const PROJECTS_TABLE: Rows = TableDefinition::new("projects");
const USERS_TABLE: Rows = TableDefinition::new("users");
const TEAMS_TABLE: Rows = TableDefinition::new("teams");
const TASKS_TABLE: Rows = TableDefinition::new("tasks");
const COMMENTS_TABLE: Rows = TableDefinition::new("comments");
const ATTACHMENTS_TABLE: Rows = TableDefinition::new("attachments");
const USERNAME_INDEX: TableDefinition<&str, u64> = TableDefinition::new("username_index");
/// Last id handed out, per table name.
const SEQUENCES_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequences");

#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Open (or create) the database file and make sure every table exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            for table in [PROJECTS_TABLE, USERS_TABLE, TEAMS_TABLE, TASKS_TABLE, COMMENTS_TABLE, ATTACHMENTS_TABLE] {
                write_txn.open_table(table)?;
            }
            write_txn.open_table(USERNAME_INDEX)?;
            write_txn.open_table(SEQUENCES_TABLE)?;
        }
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    // PROJECTS
    pub fn create_project(&self, project: NewProject) -> Result<Project, StoreError> {
        self.insert(PROJECTS_TABLE, |_| Ok(()), |id| project.with_id(id))
    }

    pub fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let read_txn = self.db.begin_read()?;
        read_rows(&read_txn, PROJECTS_TABLE)
    }

    // USERS
    pub fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let write_txn = self.db.begin_write()?;
        if let Some(team_id) = user.team_id {
            require(&write_txn, TEAMS_TABLE, "team", team_id)?;
        }

        let user_id = next_id(&write_txn, USERS_TABLE)?;
        {
            let mut username_index = write_txn.open_table(USERNAME_INDEX)?;
            let taken = username_index.get(user.username.as_str())?.is_some();
            if taken {
                return Err(StoreError::Duplicate { field: "username", value: user.username });
            }
            username_index.insert(user.username.as_str(), user_id)?;
        }

        let user = user.with_id(user_id);
        insert_row(&write_txn, USERS_TABLE, user_id, &user)?;
        write_txn.commit()?;
        Ok(user)
    }

    pub fn get_user(&self, id: u64) -> Result<Option<User>, StoreError> {
        let read_txn = self.db.begin_read()?;
        read_row(&read_txn, USERS_TABLE, id)
    }

    pub fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let read_txn = self.db.begin_read()?;
        read_rows(&read_txn, USERS_TABLE)
    }

    // TEAMS
    pub fn create_team(&self, team: NewTeam) -> Result<Team, StoreError> {
        let (owner, manager) = (team.product_owner_user_id, team.project_manager_user_id);
        self.insert(
            TEAMS_TABLE,
            |write_txn| {
                for user_id in [owner, manager].into_iter().flatten() {
                    require(write_txn, USERS_TABLE, "user", user_id)?;
                }
                Ok(())
            },
            |id| team.with_id(id),
        )
    }

    /// Teams with the product owner and project manager usernames resolved.
    pub fn list_teams(&self) -> Result<Vec<TeamResponse>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let teams: Vec<Team> = read_rows(&read_txn, TEAMS_TABLE)?;
        let usernames: HashMap<u64, String> = read_rows::<User>(&read_txn, USERS_TABLE)?
            .into_iter()
            .map(|user| (user.user_id, user.username))
            .collect();
        let username_of = |id: Option<u64>| id.and_then(|id| usernames.get(&id).cloned());

        Ok(teams
            .into_iter()
            .map(|team| TeamResponse {
                product_owner_username: username_of(team.product_owner_user_id),
                project_manager_username: username_of(team.project_manager_user_id),
                team,
            })
            .collect())
    }

    // TASKS
    pub fn create_task(&self, task: NewTask) -> Result<Task, StoreError> {
        let (project_id, author_user_id, assigned_user_id) =
            (task.project_id, task.author_user_id, task.assigned_user_id);
        self.insert(
            TASKS_TABLE,
            |write_txn| {
                require(write_txn, PROJECTS_TABLE, "project", project_id)?;
                require(write_txn, USERS_TABLE, "user", author_user_id)?;
                if let Some(assignee) = assigned_user_id {
                    require(write_txn, USERS_TABLE, "user", assignee)?;
                }
                Ok(())
            },
            |id| task.with_id(id),
        )
    }

    /// A project's tasks in storage order, without relations.
    pub fn list_project_tasks(&self, project_id: u64) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let mut tasks: Vec<Task> = read_rows(&read_txn, TASKS_TABLE)?;
        tasks.retain(|task| task.project_id == project_id);
        Ok(tasks)
    }

    /// A project's tasks with author, assignee, comments and attachments.
    pub fn project_task_details(&self, project_id: u64) -> Result<Vec<TaskDetailsResponse>, StoreError> {
        self.task_details(true, |task| task.project_id == project_id)
    }

    /// Tasks the user wrote or is assigned to, with author and assignee.
    pub fn user_task_details(
        &self,
        user_id: u64,
        priority: Option<&str>,
    ) -> Result<Vec<TaskDetailsResponse>, StoreError> {
        self.task_details(false, |task| {
            task.involves_user(user_id)
                && priority.map_or(true, |wanted| task.priority.as_deref() == Some(wanted))
        })
    }

    /// Overwrite one task's status and return the updated task.
    ///
    /// There is no transition table: any status may follow any other. An
    /// unknown id aborts the transaction with nothing written.
    pub fn update_task_status(&self, task_id: u64, status: &str) -> Result<Task, StoreError> {
        let write_txn = self.db.begin_write()?;
        let task = {
            let mut tasks = write_txn.open_table(TASKS_TABLE)?;
            let stored = tasks.get(task_id)?.map(|row| decode::<Task>(row.value()));
            let mut task = match stored {
                Some(task) => task?,
                None => return Err(StoreError::NotFound { entity: "task", id: task_id }),
            };

            tracing::debug!(task_id, from = %task.status, to = status, "task status changed");
            task.status = status.to_string();
            let bytes = encode(&task)?;
            tasks.insert(task_id, bytes.as_slice())?;
            task
        };
        write_txn.commit()?;
        Ok(task)
    }

    // COMMENTS & ATTACHMENTS
    pub fn create_comment(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let (task_id, user_id) = (comment.task_id, comment.user_id);
        self.insert(
            COMMENTS_TABLE,
            |write_txn| {
                require_task(write_txn, task_id)?;
                require(write_txn, USERS_TABLE, "user", user_id)
            },
            |id| comment.with_id(id),
        )
    }

    pub fn create_attachment(&self, attachment: NewAttachment) -> Result<Attachment, StoreError> {
        let (task_id, user_id) = (attachment.task_id, attachment.uploaded_by_id);
        self.insert(
            ATTACHMENTS_TABLE,
            |write_txn| {
                require_task(write_txn, task_id)?;
                require(write_txn, USERS_TABLE, "user", user_id)
            },
            |id| attachment.with_id(id),
        )
    }

    // SEARCH
    /// Case-insensitive substring match over task titles and descriptions,
    /// project names and descriptions, and usernames.
    pub fn search(&self, query: &str) -> Result<SearchResponse, StoreError> {
        let needle = query.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);
        let hit_opt = |text: &Option<String>| text.as_deref().is_some_and(hit);

        let read_txn = self.db.begin_read()?;
        let mut response = SearchResponse {
            tasks: read_rows(&read_txn, TASKS_TABLE)?,
            projects: read_rows(&read_txn, PROJECTS_TABLE)?,
            users: read_rows(&read_txn, USERS_TABLE)?,
        };
        response.tasks.retain(|task| hit(&task.title) || hit_opt(&task.description));
        response.projects.retain(|project| hit(&project.name) || hit_opt(&project.description));
        response.users.retain(|user| hit(&user.username));
        Ok(response)
    }

    // SEEDING
    /// Write a small demo workspace if there are no users yet. Returns true if created.
    pub fn ensure_demo_data(&self) -> Result<bool, StoreError> {
        if !self.list_users()?.is_empty() {
            return Ok(false);
        }

        let team = self.create_team(NewTeam {
            team_name: "Core Platform".to_string(),
            product_owner_user_id: None,
            project_manager_user_id: None,
        })?;
        let alice = self.create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            profile_picture_url: None,
            team_id: Some(team.id),
        })?;
        let bob = self.create_user(NewUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            profile_picture_url: None,
            team_id: Some(team.id),
        })?;
        let project = self.create_project(NewProject {
            name: "Website Relaunch".to_string(),
            description: Some("Rebuild the marketing site".to_string()),
            start_date: None,
            end_date: None,
        })?;

        let seeds = [
            ("Collect requirements", TaskStatus::Completed, TaskPriority::Medium, "planning"),
            ("Design landing page", TaskStatus::UnderReview, TaskPriority::High, "design,frontend"),
            ("Build CMS integration", TaskStatus::WorkInProgress, TaskPriority::Urgent, "backend"),
            ("Write launch post", TaskStatus::ToDo, TaskPriority::Low, "marketing"),
        ];
        for (title, status, priority, tags) in seeds {
            self.create_task(NewTask {
                title: title.to_string(),
                description: None,
                status: status.to_string(),
                priority: Some(priority.to_string()),
                tags: Some(tags.to_string()),
                start_date: None,
                due_date: None,
                points: None,
                project_id: project.id,
                author_user_id: alice.user_id,
                assigned_user_id: Some(bob.user_id),
            })?;
        }

        Ok(true)
    }

    // HELPERS
    /// Allocate an id, run `check` in the same transaction, then store `build(id)`.
    fn insert<T: Serialize>(
        &self,
        table: Rows,
        check: impl FnOnce(&WriteTransaction) -> Result<(), StoreError>,
        build: impl FnOnce(u64) -> T,
    ) -> Result<T, StoreError> {
        let write_txn = self.db.begin_write()?;
        check(&write_txn)?;
        let id = next_id(&write_txn, table)?;
        let record = build(id);
        insert_row(&write_txn, table, id, &record)?;
        write_txn.commit()?;
        Ok(record)
    }

    fn task_details(
        &self,
        with_activity: bool,
        keep: impl Fn(&Task) -> bool,
    ) -> Result<Vec<TaskDetailsResponse>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let mut tasks: Vec<Task> = read_rows(&read_txn, TASKS_TABLE)?;
        tasks.retain(|task| keep(task));
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let users: HashMap<u64, User> = read_rows::<User>(&read_txn, USERS_TABLE)?
            .into_iter()
            .map(|user| (user.user_id, user))
            .collect();
        let (mut comments, mut attachments) = if with_activity {
            (
                by_task(read_rows::<Comment>(&read_txn, COMMENTS_TABLE)?, |c| c.task_id),
                by_task(read_rows::<Attachment>(&read_txn, ATTACHMENTS_TABLE)?, |a| a.task_id),
            )
        } else {
            (HashMap::new(), HashMap::new())
        };

        Ok(tasks
            .into_iter()
            .map(|task| TaskDetailsResponse {
                author: users.get(&task.author_user_id).cloned(),
                assignee: task.assigned_user_id.and_then(|id| users.get(&id).cloned()),
                comments: with_activity.then(|| comments.remove(&task.id).unwrap_or_default()),
                attachments: with_activity.then(|| attachments.remove(&task.id).unwrap_or_default()),
                task,
            })
            .collect())
    }
}

fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, StoreError> {
    postcard::to_allocvec(record).map_err(|e| StoreError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    postcard::from_bytes(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

fn read_rows<T: DeserializeOwned>(read_txn: &ReadTransaction, table: Rows) -> Result<Vec<T>, StoreError> {
    let table = read_txn.open_table(table)?;
    let mut rows = Vec::new();
    for entry in table.iter()? {
        let (_, value) = entry?;
        rows.push(decode(value.value())?);
    }
    Ok(rows)
}

fn read_row<T: DeserializeOwned>(read_txn: &ReadTransaction, table: Rows, id: u64) -> Result<Option<T>, StoreError> {
    let table = read_txn.open_table(table)?;
    let row = match table.get(id)? {
        Some(data) => Some(decode(data.value())?),
        None => None,
    };
    Ok(row)
}

fn insert_row<T: Serialize>(write_txn: &WriteTransaction, table: Rows, id: u64, record: &T) -> Result<(), StoreError> {
    let bytes = encode(record)?;
    let mut table = write_txn.open_table(table)?;
    table.insert(id, bytes.as_slice())?;
    Ok(())
}

fn next_id(write_txn: &WriteTransaction, table: Rows) -> Result<u64, StoreError> {
    let mut sequences = write_txn.open_table(SEQUENCES_TABLE)?;
    let next = sequences.get(table.name())?.map(|last| last.value()).unwrap_or(0) + 1;
    sequences.insert(table.name(), next)?;
    Ok(next)
}

fn row_exists(write_txn: &WriteTransaction, table: Rows, id: u64) -> Result<bool, StoreError> {
    let table = write_txn.open_table(table)?;
    let found = table.get(id)?.is_some();
    Ok(found)
}

/// The referenced row must exist, otherwise the incoming record is rejected.
fn require(write_txn: &WriteTransaction, table: Rows, entity: &'static str, id: u64) -> Result<(), StoreError> {
    if row_exists(write_txn, table, id)? {
        Ok(())
    } else {
        Err(StoreError::DanglingReference { entity, id })
    }
}

/// Like [`require`], for the task a nested resource is addressed under.
fn require_task(write_txn: &WriteTransaction, id: u64) -> Result<(), StoreError> {
    if row_exists(write_txn, TASKS_TABLE, id)? {
        Ok(())
    } else {
        Err(StoreError::NotFound { entity: "task", id })
    }
}

fn by_task<T>(rows: Vec<T>, task_id: impl Fn(&T) -> u64) -> HashMap<u64, Vec<T>> {
    let mut grouped: HashMap<u64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(task_id(&row)).or_default().push(row);
    }
    grouped
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// A fresh database file under the temp dir. Remove with `cleanup`.
    fn temp_context(name: &str) -> (DataContext, String) {
        let path = std::env::temp_dir()
            .join(format!("taskboard_test_{name}_{}.redb", std::process::id()))
            .to_string_lossy()
            .into_owned();
        let _ = fs::remove_file(&path);
        let context = DataContext::new(&path).unwrap();
        (context, path)
    }

    fn cleanup(path: &str) {
        let _ = fs::remove_file(path);
    }

    fn user(context: &DataContext, username: &str) -> User {
        context
            .create_user(NewUser {
                username: username.into(),
                email: format!("{username}@example.com"),
                profile_picture_url: None,
                team_id: None,
            })
            .unwrap()
    }

    fn project(context: &DataContext, name: &str) -> Project {
        context
            .create_project(NewProject { name: name.into(), description: None, start_date: None, end_date: None })
            .unwrap()
    }

    fn new_task(title: &str, project_id: u64, author: u64, assignee: Option<u64>) -> NewTask {
        NewTask {
            title: title.into(),
            description: None,
            status: "To Do".into(),
            priority: Some("Medium".into()),
            tags: None,
            start_date: None,
            due_date: None,
            points: Some(3),
            project_id,
            author_user_id: author,
            assigned_user_id: assignee,
        }
    }

    #[test]
    fn ids_are_assigned_in_sequence_per_table() {
        let (context, path) = temp_context("sequence");

        let p1 = project(&context, "Alpha");
        let p2 = project(&context, "Beta");
        let u1 = user(&context, "ann");
        assert_eq!((p1.id, p2.id, u1.user_id), (1, 2, 1));

        cleanup(&path);
    }

    #[test]
    fn create_task_checks_references() {
        let (context, path) = temp_context("references");
        let p = project(&context, "Alpha");
        let author = user(&context, "ann");

        let err = context.create_task(new_task("No project", 99, author.user_id, None)).unwrap_err();
        assert!(matches!(err, StoreError::DanglingReference { entity: "project", id: 99 }));

        let err = context.create_task(new_task("No author", p.id, 42, None)).unwrap_err();
        assert!(matches!(err, StoreError::DanglingReference { entity: "user", id: 42 }));

        let err = context.create_task(new_task("No assignee", p.id, author.user_id, Some(7))).unwrap_err();
        assert!(matches!(err, StoreError::DanglingReference { entity: "user", id: 7 }));

        // Nothing was written and no id was burned.
        assert!(context.list_project_tasks(p.id).unwrap().is_empty());
        let task = context.create_task(new_task("Real", p.id, author.user_id, None)).unwrap();
        assert_eq!(task.id, 1);

        cleanup(&path);
    }

    #[test]
    fn update_status_persists_and_is_idempotent() {
        let (context, path) = temp_context("status");
        let p = project(&context, "Alpha");
        let author = user(&context, "ann");
        let task = context.create_task(new_task("Ship it", p.id, author.user_id, None)).unwrap();

        let once = context.update_task_status(task.id, "Completed").unwrap();
        let twice = context.update_task_status(task.id, "Completed").unwrap();
        assert_eq!(once, twice);
        assert_eq!(context.list_project_tasks(p.id).unwrap()[0].status, "Completed");

        // No transition table: back to the start is allowed.
        let reopened = context.update_task_status(task.id, "To Do").unwrap();
        assert_eq!(reopened.status, "To Do");
        assert_eq!(reopened.title, "Ship it");

        cleanup(&path);
    }

    #[test]
    fn update_status_of_unknown_task_is_not_found() {
        let (context, path) = temp_context("status_missing");

        let err = context.update_task_status(999_999, "Completed").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "task", id: 999_999 }));

        cleanup(&path);
    }

    #[test]
    fn project_details_only_include_that_project() {
        let (context, path) = temp_context("project_details");
        let alpha = project(&context, "Alpha");
        let beta = project(&context, "Beta");
        let ann = user(&context, "ann");
        let bo = user(&context, "bo");

        let t1 = context.create_task(new_task("A1", alpha.id, ann.user_id, Some(bo.user_id))).unwrap();
        context.create_task(new_task("B1", beta.id, ann.user_id, None)).unwrap();
        let t3 = context.create_task(new_task("A2", alpha.id, bo.user_id, None)).unwrap();
        context
            .create_comment(NewComment { text: "looks good".into(), task_id: t1.id, user_id: bo.user_id })
            .unwrap();

        let details = context.project_task_details(alpha.id).unwrap();
        let ids: Vec<u64> = details.iter().map(|d| d.task.id).collect();
        assert_eq!(ids, vec![t1.id, t3.id]);

        assert_eq!(details[0].author.as_ref().unwrap().username, "ann");
        assert_eq!(details[0].assignee.as_ref().unwrap().username, "bo");
        assert_eq!(details[0].comments.as_ref().unwrap().len(), 1);
        assert_eq!(details[1].assignee, None);
        assert_eq!(details[1].comments.as_deref(), Some(&[][..]));
        assert_eq!(details[1].attachments.as_deref(), Some(&[][..]));

        cleanup(&path);
    }

    #[test]
    fn user_details_cover_author_or_assignee() {
        let (context, path) = temp_context("user_details");
        let p = project(&context, "Alpha");
        let ann = user(&context, "ann");
        let bo = user(&context, "bo");
        let cy = user(&context, "cy");

        let written = context.create_task(new_task("written", p.id, ann.user_id, None)).unwrap();
        let assigned = context.create_task(new_task("assigned", p.id, bo.user_id, Some(ann.user_id))).unwrap();
        context.create_task(new_task("unrelated", p.id, bo.user_id, Some(cy.user_id))).unwrap();

        let details = context.user_task_details(ann.user_id, None).unwrap();
        let ids: Vec<u64> = details.iter().map(|d| d.task.id).collect();
        assert_eq!(ids, vec![written.id, assigned.id]);
        assert!(details.iter().all(|d| d.comments.is_none() && d.attachments.is_none()));

        assert!(context.user_task_details(ann.user_id, Some("Urgent")).unwrap().is_empty());
        assert_eq!(context.user_task_details(ann.user_id, Some("Medium")).unwrap().len(), 2);

        cleanup(&path);
    }

    #[test]
    fn usernames_are_unique() {
        let (context, path) = temp_context("usernames");
        user(&context, "ann");

        let err = context
            .create_user(NewUser {
                username: "ann".into(),
                email: "other@example.com".into(),
                profile_picture_url: None,
                team_id: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { field: "username", .. }));
        assert_eq!(context.list_users().unwrap().len(), 1);

        cleanup(&path);
    }

    #[test]
    fn teams_resolve_usernames() {
        let (context, path) = temp_context("teams");
        let ann = user(&context, "ann");

        context
            .create_team(NewTeam {
                team_name: "Platform".into(),
                product_owner_user_id: Some(ann.user_id),
                project_manager_user_id: None,
            })
            .unwrap();

        let teams = context.list_teams().unwrap();
        assert_eq!(teams[0].product_owner_username.as_deref(), Some("ann"));
        assert_eq!(teams[0].project_manager_username, None);

        let err = context
            .create_team(NewTeam { team_name: "Ghosts".into(), product_owner_user_id: Some(50), project_manager_user_id: None })
            .unwrap_err();
        assert!(matches!(err, StoreError::DanglingReference { .. }));

        cleanup(&path);
    }

    #[test]
    fn comments_need_an_existing_task() {
        let (context, path) = temp_context("comments");
        let ann = user(&context, "ann");

        let err = context
            .create_comment(NewComment { text: "hello".into(), task_id: 5, user_id: ann.user_id })
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "task", id: 5 }));

        cleanup(&path);
    }

    #[test]
    fn search_is_case_insensitive() {
        let (context, path) = temp_context("search");
        let p = project(&context, "Mobile App");
        let ann = user(&context, "Annabel");
        context.create_task(new_task("Fix login crash", p.id, ann.user_id, None)).unwrap();
        context.create_task(new_task("Update docs", p.id, ann.user_id, None)).unwrap();

        let hits = context.search("LOGIN").unwrap();
        assert_eq!(hits.tasks.len(), 1);
        assert!(hits.projects.is_empty());

        let hits = context.search("app").unwrap();
        assert_eq!(hits.projects.len(), 1);

        let hits = context.search("anna").unwrap();
        assert_eq!(hits.users.len(), 1);

        cleanup(&path);
    }

    #[test]
    fn demo_data_is_seeded_once_and_survives_reopen() {
        let (context, path) = temp_context("seed");

        assert!(context.ensure_demo_data().unwrap());
        assert!(!context.ensure_demo_data().unwrap());
        drop(context);

        let reopened = DataContext::new(&path).unwrap();
        assert_eq!(reopened.list_users().unwrap().len(), 2);
        assert_eq!(reopened.list_projects().unwrap().len(), 1);
        assert_eq!(reopened.list_project_tasks(1).unwrap().len(), 4);
        let urgent = reopened.user_task_details(2, Some(TaskPriority::Urgent.as_str())).unwrap();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].task.status, "Work In Progress");

        // Sequences survive too.
        let p = project(&reopened, "Second");
        assert_eq!(p.id, 2);

        cleanup(&path);
    }
}
