use crate::domain::common::{AggregateRoot, NameRef};
use crate::shared::doc_numbers::document_number;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Operation name used when a job is started without a routing
pub const FALLBACK_OPERATION: &str = "Operation 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "CNC")]
    Cnc,
    #[serde(rename = "PLATING")]
    Plating,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Cnc => "CNC",
            JobType::Plating => "PLATING",
        }
    }

    /// Prefix of the job number
    pub fn prefix(&self) -> &'static str {
        match self {
            JobType::Cnc => "CNC",
            JobType::Plating => "PLT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CNC" => Some(JobType::Cnc),
            "PLATING" => Some(JobType::Plating),
            _ => None,
        }
    }

    pub fn all() -> [JobType; 2] {
        [JobType::Cnc, JobType::Plating]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    Pending,
    InProgress,
    PendingChallan,
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in-progress",
            JobStatus::PendingChallan => "pending-challan",
            JobStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(JobStatus::Pending),
            "in-progress" => Some(JobStatus::InProgress),
            "pending-challan" => Some(JobStatus::PendingChallan),
            "completed" => Some(JobStatus::Completed),
            _ => None,
        }
    }

    /// Badge caption: first hyphen becomes a space, upper-cased
    pub fn label(&self) -> String {
        self.as_str().replacen('-', " ", 1).to_uppercase()
    }

    /// Badge colour variant
    pub fn badge_variant(&self) -> &'static str {
        match self {
            JobStatus::Completed => "success",
            JobStatus::InProgress => "primary",
            JobStatus::PendingChallan => "warning",
            JobStatus::Pending => "neutral",
        }
    }

    pub fn all() -> [JobStatus; 4] {
        [
            JobStatus::Pending,
            JobStatus::InProgress,
            JobStatus::PendingChallan,
            JobStatus::Completed,
        ]
    }
}

/// One routing step
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteOp {
    pub op_seq: i32,
    pub op_name: String,
    pub machine_id: String,
    pub operator_id: String,
}

impl RouteOp {
    pub fn blank(op_seq: i32) -> Self {
        Self {
            op_seq,
            ..Default::default()
        }
    }
}

/// Sequence number for the next operation appended to `route`
pub fn next_op_seq(route: &[RouteOp]) -> i32 {
    (route.len() as i32 + 1) * 10
}

/// Re-numbers operations 10, 20, 30... in their current order
pub fn renumber_route(route: &mut [RouteOp]) {
    for (index, op) in route.iter_mut().enumerate() {
        op.op_seq = (index as i32 + 1) * 10;
    }
}

/// Formats a job number such as `CNC-2025-042`
pub fn job_number(job_type: JobType, year: i32, suffix: u32) -> String {
    document_number(job_type.prefix(), year, suffix)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub job_id: String,
    pub customer_id: i64,
    pub part_no: String,
    pub rev: String,
    pub qty_ordered: i32,
    pub qty_completed: i32,
    pub due_date: NaiveDate,
    pub route: Vec<RouteOp>,
    pub job_type: JobType,
    pub status: JobStatus,
    pub current_operation: Option<String>,
    pub total_cost: f64,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<NameRef>,
}

impl Job {
    pub fn new_for_insert(dto: &JobDto) -> Result<Self, String> {
        let due_date = dto.due_date.ok_or("Due date is required")?;
        let customer_id = dto.customer_id.ok_or("Customer is required")?;
        let mut route = dto.route.clone();
        renumber_route(&mut route);
        Ok(Self {
            id: 0,
            job_id: dto.job_id.trim().to_string(),
            customer_id,
            part_no: dto.part_no.trim().to_string(),
            rev: dto.rev.trim().to_string(),
            qty_ordered: dto.qty_ordered,
            qty_completed: 0,
            due_date,
            route,
            job_type: dto.job_type,
            status: JobStatus::Pending,
            current_operation: None,
            total_cost: dto.total_cost,
            created_at: Some(Utc::now()),
            customers: None,
        })
    }

    /// Edits header and routing; status and progress are changed only by shop-floor actions
    pub fn update(&mut self, dto: &JobDto) -> Result<(), String> {
        self.customer_id = dto.customer_id.ok_or("Customer is required")?;
        self.due_date = dto.due_date.ok_or("Due date is required")?;
        self.part_no = dto.part_no.trim().to_string();
        self.rev = dto.rev.trim().to_string();
        self.qty_ordered = dto.qty_ordered;
        self.job_type = dto.job_type;
        self.total_cost = dto.total_cost;
        self.route = dto.route.clone();
        renumber_route(&mut self.route);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.job_id.is_empty() {
            return Err("Job ID is required".into());
        }
        if !self.job_id.starts_with(self.job_type.prefix()) {
            return Err(format!(
                "Job ID '{}' does not match job type {}",
                self.job_id,
                self.job_type.as_str()
            ));
        }
        if self.part_no.is_empty() {
            return Err("Part is required".into());
        }
        if self.qty_ordered <= 0 {
            return Err("Ordered quantity must be positive".into());
        }
        if self.route.iter().any(|op| op.op_name.trim().is_empty()) {
            return Err("Every routing operation needs a name".into());
        }
        if self.total_cost < 0.0 {
            return Err("Cost cannot be negative".into());
        }
        Ok(())
    }

    pub fn is_on_shop_floor(&self) -> bool {
        matches!(self.status, JobStatus::Pending | JobStatus::InProgress)
    }

    /// Shop floor "Start": moves to in-progress at the first routed operation
    pub fn start(&mut self) -> Result<(), String> {
        if !self.is_on_shop_floor() {
            return Err(format!("Job {} cannot be started from {}", self.job_id, self.status.as_str()));
        }
        self.status = JobStatus::InProgress;
        let first = self
            .route
            .first()
            .map(|op| op.op_name.trim())
            .filter(|name| !name.is_empty());
        self.current_operation = Some(first.unwrap_or(FALLBACK_OPERATION).to_string());
        Ok(())
    }

    /// Shop floor "Pause": back to pending with no active operation
    pub fn pause(&mut self) -> Result<(), String> {
        if self.status != JobStatus::InProgress {
            return Err(format!("Job {} is not running", self.job_id));
        }
        self.status = JobStatus::Pending;
        self.current_operation = None;
        Ok(())
    }

    /// Shop floor "Complete": records produced quantity and closes the job when the order is met
    pub fn record_completed(&mut self, qty_completed: i32) -> Result<(), String> {
        if self.status != JobStatus::InProgress {
            return Err(format!(
                "Job {} cannot report output while {}",
                self.job_id,
                self.status.as_str()
            ));
        }
        if qty_completed < 0 {
            return Err("Completed quantity cannot be negative".into());
        }
        self.qty_completed = qty_completed;
        if qty_completed >= self.qty_ordered {
            self.status = JobStatus::Completed;
            self.current_operation = None;
        } else {
            self.status = JobStatus::InProgress;
        }
        Ok(())
    }

    /// Goods went out on a plating challan
    pub fn mark_pending_challan(&mut self) {
        self.status = JobStatus::PendingChallan;
    }

    /// Goods came back from the plater
    pub fn mark_completed(&mut self) {
        self.status = JobStatus::Completed;
        self.current_operation = None;
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.qty_completed, self.qty_ordered)
    }

    pub fn to_dto(&self) -> JobDto {
        JobDto {
            id: Some(self.id),
            job_id: self.job_id.clone(),
            customer_id: Some(self.customer_id),
            part_no: self.part_no.clone(),
            rev: self.rev.clone(),
            qty_ordered: self.qty_ordered,
            due_date: Some(self.due_date),
            job_type: self.job_type,
            route: self.route.clone(),
            total_cost: self.total_cost,
        }
    }
}

/// `min(completed / ordered * 100, 100)`; zero when nothing was ordered
pub fn progress_percent(qty_completed: i32, qty_ordered: i32) -> f64 {
    if qty_ordered <= 0 {
        return 0.0;
    }
    (qty_completed as f64 / qty_ordered as f64 * 100.0).clamp(0.0, 100.0)
}

impl AggregateRoot for Job {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn table_name() -> &'static str {
        "jobs"
    }

    fn element_name() -> &'static str {
        "Job Order"
    }

    fn list_name() -> &'static str {
        "Job Orders"
    }
}

/// Job wizard form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDto {
    pub id: Option<i64>,
    pub job_id: String,
    pub customer_id: Option<i64>,
    pub part_no: String,
    pub rev: String,
    pub qty_ordered: i32,
    pub due_date: Option<NaiveDate>,
    pub job_type: JobType,
    pub route: Vec<RouteOp>,
    #[serde(default)]
    pub total_cost: f64,
}

impl Default for JobDto {
    fn default() -> Self {
        Self {
            id: None,
            job_id: String::new(),
            customer_id: None,
            part_no: String::new(),
            rev: "A".into(),
            qty_ordered: 0,
            due_date: None,
            job_type: JobType::Cnc,
            route: vec![RouteOp::blank(10)],
            total_cost: 0.0,
        }
    }
}

/// Body of the shop floor "Complete" action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteJobRequest {
    pub qty_completed: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        let dto = JobDto {
            job_id: "CNC-2025-001".into(),
            customer_id: Some(1),
            part_no: "P1001".into(),
            qty_ordered: 100,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 15),
            route: vec![
                RouteOp {
                    op_name: "Turning".into(),
                    ..RouteOp::blank(10)
                },
                RouteOp {
                    op_name: "Milling".into(),
                    ..RouteOp::blank(20)
                },
            ],
            ..Default::default()
        };
        Job::new_for_insert(&dto).unwrap()
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(JobStatus::PendingChallan).unwrap(),
            "pending-challan"
        );
        assert_eq!(serde_json::to_value(JobType::Plating).unwrap(), "PLATING");
        assert_eq!(JobStatus::InProgress.label(), "IN PROGRESS");
    }

    #[test]
    fn job_numbers_follow_type_prefix() {
        assert_eq!(job_number(JobType::Cnc, 2025, 1), "CNC-2025-001");
        assert_eq!(job_number(JobType::Plating, 2025, 42), "PLT-2025-042");
    }

    #[test]
    fn route_sequences_step_by_ten() {
        let mut route = vec![RouteOp::blank(10)];
        route.push(RouteOp::blank(next_op_seq(&route)));
        assert_eq!(route[1].op_seq, 20);
        route.remove(0);
        renumber_route(&mut route);
        assert_eq!(route[0].op_seq, 10);
        assert_eq!(next_op_seq(&route), 20);
    }

    #[test]
    fn new_jobs_start_pending() {
        let job = sample_job();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.qty_completed, 0);
        assert!(job.current_operation.is_none());
        assert!(job.validate().is_ok());
    }

    #[test]
    fn start_uses_first_operation() {
        let mut job = sample_job();
        job.start().unwrap();
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.current_operation.as_deref(), Some("Turning"));

        let mut bare = sample_job();
        bare.route.clear();
        bare.start().unwrap();
        assert_eq!(bare.current_operation.as_deref(), Some(FALLBACK_OPERATION));
    }

    #[test]
    fn pause_clears_operation() {
        let mut job = sample_job();
        job.start().unwrap();
        job.pause().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert!(job.current_operation.is_none());
        assert!(job.pause().is_err());
    }

    #[test]
    fn partial_completion_keeps_running() {
        let mut job = sample_job();
        job.start().unwrap();
        job.record_completed(40).unwrap();
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.progress_percent(), 40.0);

        job.record_completed(120).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert!(job.current_operation.is_none());
        assert_eq!(job.progress_percent(), 100.0);
        assert!(job.start().is_err());
    }

    #[test]
    fn completion_needs_a_running_job() {
        let mut pending = sample_job();
        assert!(pending.record_completed(10).is_err());
        assert_eq!(pending.status, JobStatus::Pending);
        assert_eq!(pending.qty_completed, 0);

        let mut at_plater = sample_job();
        at_plater.mark_pending_challan();
        assert!(at_plater.record_completed(10).is_err());
        assert_eq!(at_plater.status, JobStatus::PendingChallan);

        let mut done = sample_job();
        done.start().unwrap();
        done.record_completed(100).unwrap();
        assert!(done.record_completed(10).is_err());
        assert_eq!(done.status, JobStatus::Completed);
        assert_eq!(done.qty_completed, 100);
    }

    #[test]
    fn negative_output_is_rejected() {
        let mut job = sample_job();
        job.start().unwrap();
        assert!(job.record_completed(-1).is_err());
        assert_eq!(job.status, JobStatus::InProgress);
    }

    #[test]
    fn challan_moves_job_off_the_floor_and_back_as_completed() {
        let mut job = sample_job();
        job.start().unwrap();
        job.mark_pending_challan();
        assert_eq!(job.status, JobStatus::PendingChallan);
        assert!(!job.is_on_shop_floor());

        job.mark_completed();
        assert_eq!(job.status, JobStatus::Completed);
        assert!(job.current_operation.is_none());
    }

    #[test]
    fn progress_handles_zero_order() {
        assert_eq!(progress_percent(5, 0), 0.0);
        assert_eq!(progress_percent(50, 200), 25.0);
    }

    #[test]
    fn mismatched_prefix_is_rejected() {
        let mut job = sample_job();
        job.job_type = JobType::Plating;
        assert!(job.validate().is_err());
    }
}
