//! Sample directory used by demos and the seed binary.
//!
//! Sample employees are created and progressed through
//! [`EmployeeLifecycleService`], the same code path live callers use, so seed
//! records obey every invariant real records do.

use crate::employee::{
    domain::{Employee, ProfileInput, TaskCategory},
    ports::EmployeeRepository,
    services::{
        AddTaskRequest, CreateEmployeeRequest, EmployeeLifecycleResult, EmployeeLifecycleService,
    },
};
use crate::flow::{domain::FlowTemplateId, ports::FlowTemplateRepository};
use mockable::Clock;
use tracing::info;

struct SampleHire {
    name: &'static str,
    email: &'static str,
    role: &'static str,
    department: &'static str,
    start_date: &'static str,
    manager: &'static str,
    total_tasks: usize,
    completed_tasks: usize,
    from_template: bool,
    note: Option<(&'static str, &'static str)>,
}

const SAMPLE_HIRES: [SampleHire; 3] = [
    SampleHire {
        name: "Sarah Chen",
        email: "sarah.chen@company.com",
        role: "Frontend Developer",
        department: "Engineering",
        start_date: "2024-02-15",
        manager: "Alex Rodriguez",
        total_tasks: 8,
        completed_tasks: 6,
        from_template: false,
        note: Some((
            "Anna Martinez",
            "Sarah has been very responsive and proactive. All documents submitted on time.",
        )),
    },
    SampleHire {
        name: "Marcus Johnson",
        email: "marcus.johnson@company.com",
        role: "Product Manager",
        department: "Product",
        start_date: "2024-02-20",
        manager: "Lisa Wang",
        total_tasks: 6,
        completed_tasks: 6,
        from_template: false,
        note: None,
    },
    SampleHire {
        name: "Emily Rodriguez",
        email: "emily.rodriguez@company.com",
        role: "UX Designer",
        department: "Design",
        start_date: "2024-02-25",
        manager: "David Kim",
        total_tasks: 11,
        completed_tasks: 5,
        from_template: true,
        note: None,
    },
];

/// Tasks added after creation to bring each hire up to its sample task count.
const EXTRA_TASKS: [(&str, TaskCategory); 8] = [
    ("Security Training", TaskCategory::Video),
    ("Benefits Enrollment", TaskCategory::Document),
    ("Team Lunch", TaskCategory::Meeting),
    ("Dev Environment Setup", TaskCategory::Setup),
    ("Product Demo", TaskCategory::Video),
    ("HR Policies Review", TaskCategory::Document),
    ("Customer Shadowing", TaskCategory::Meeting),
    ("Design System Walkthrough", TaskCategory::Video),
];

/// Adds the sample hires to the directory and returns them in insertion
/// order.
///
/// Hires flagged for a flow template use `template_id` when one is given and
/// fall back to the default task set otherwise. Extra tasks are then added
/// until each hire holds its sample task count, and the first few are toggled
/// complete. The directory ends at 75, 100 and 45 percent.
///
/// # Errors
///
/// Returns the first service error encountered; records created before the
/// failure remain in the directory.
pub async fn seed_sample_directory<R, T, C>(
    service: &EmployeeLifecycleService<R, T, C>,
    template_id: Option<FlowTemplateId>,
) -> EmployeeLifecycleResult<Vec<Employee>>
where
    R: EmployeeRepository,
    T: FlowTemplateRepository,
    C: Clock + Send + Sync,
{
    let mut seeded = Vec::with_capacity(SAMPLE_HIRES.len());
    for hire in &SAMPLE_HIRES {
        let profile = ProfileInput::new(
            hire.name,
            hire.email,
            hire.role,
            hire.department,
            hire.start_date,
            hire.manager,
        );
        let mut request = CreateEmployeeRequest::new(profile);
        if hire.from_template
            && let Some(id) = template_id
        {
            request = request.with_template(id);
        }

        let mut employee = service.create_employee(request).await?;
        let missing = hire.total_tasks.saturating_sub(employee.tasks().len());
        for &(title, category) in EXTRA_TASKS.iter().cycle().take(missing) {
            employee = service
                .add_task(AddTaskRequest::new(employee.id(), title, category))
                .await?;
        }
        let to_complete: Vec<_> = employee
            .tasks()
            .iter()
            .take(hire.completed_tasks)
            .map(|task| task.id())
            .collect();
        for task_id in to_complete {
            employee = service.toggle_task(employee.id(), task_id).await?;
        }
        if let Some((author, content)) = hire.note {
            employee = service.add_note(employee.id(), author, content).await?;
        }
        seeded.push(employee);
    }

    info!(count = seeded.len(), "sample directory seeded");
    Ok(seeded)
}
