use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct SkillsCommand;

const SKILLS: &str = "Technical Skills:

• Languages & Core:
  - Python, JavaScript, HTML/CSS, Ruby
  - Learning Rust!
  - Data Structures & Algorithms
  - MS in Computer Science focused on Computational Perception and Interactive Intelligence

• Machine Learning & Computer Vision:
  - Pose Estimation
  - Real-time Video Classification
  - Feature Engineering
  - Scikit-learn, MLflow

• Frontend:
  - React
  - Data Visualization

• Backend:
  - Flask / Django
  - Rails

• DevOps & Tools:
  - Docker
  - Git, Version Control
  - AWS, Cloud Services
  - Linux, macOS";

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("skills", "List my technical skills", "skills", Category::Content)
        .with_aliases(&["technologies", "tech"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), SkillsCommand))
}

impl Command for SkillsCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        Execution::ok(SKILLS)
    }
}
