//! In-memory integration tests for flow template authoring.

use super::helpers::{Stack, stack};
use onboarding::flow::{
    domain::{BlockType, BuddyConfig, FlowPhase, TaskBlueprint},
    services::CreateTemplateRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authored_template_is_listed_under_its_phase(stack: Stack) -> Result<(), eyre::Report> {
    stack.templates.install_standard_templates().await?;
    let custom = stack
        .templates
        .create_template(CreateTemplateRequest::new(
            "Design pre-boarding",
            FlowPhase::PreOnboarding,
        ))
        .await?;
    let with_buddy = stack
        .templates
        .append_blueprint(
            custom.id(),
            TaskBlueprint::new("Pair with a designer", "", BuddyConfig::new(true, 4)?),
        )
        .await?;

    let pre = stack
        .templates
        .list_templates(Some(FlowPhase::PreOnboarding))
        .await?;

    let names: Vec<&str> = pre.iter().map(|template| template.name()).collect();
    eyre::ensure!(names == ["Standard pre-onboarding", "Design pre-boarding"]);
    let types: Vec<BlockType> = with_buddy
        .blueprints()
        .iter()
        .map(TaskBlueprint::block_type)
        .collect();
    eyre::ensure!(types == [BlockType::Buddy]);
    Ok(())
}
