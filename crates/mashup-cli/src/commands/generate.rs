//! Generate command implementation.

use anyhow::Result;
use mashup_core::GenerationConfigOverrides;
use mashup_ops::{BatchGenerateRequest, Config, GenerateRequest, OpsContext};

/// Generate `count` ideas and print them.
pub async fn execute(
    config: Config,
    count: usize,
    overrides: GenerationConfigOverrides,
    json: bool,
) -> Result<()> {
    let ctx = OpsContext::open(config).await?;

    let ideas = if count == 1 {
        vec![ctx.generate(GenerateRequest::new().with_config(overrides)).await?]
    } else {
        ctx.generate_batch(BatchGenerateRequest::new(count).with_config(overrides))
            .await?
            .ideas
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ideas)?);
        return Ok(());
    }

    for (i, idea) in ideas.iter().enumerate() {
        if ideas.len() > 1 {
            println!("💡 Idea {}", i + 1);
        } else {
            println!("💡 Idea");
        }
        println!("{:─<50}", "");
        println!("{}", idea.content.description);
        println!();
        println!("   Persona:        {}", idea.content.persona);
        println!("   Problem:        {}", idea.content.problem);
        println!("   Technology:     {}", idea.content.technology);
        println!("   Business model: {}", idea.content.business_model);
        if let Some(format) = &idea.content.format {
            println!("   Format:         {}", format);
        }
        println!();
    }

    Ok(())
}
