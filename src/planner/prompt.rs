use super::types::PlanRequest;

const TUTOR_TEMPLATE: &str = r#"I want to learn {topic} from the world's best professional-YOU. You are the ultimate expert, the top authority in this field, and the best tutor anyone could ever learn from. No one can match your knowledge and expertise.

Course Parameters:
- Duration: {weeks} weeks
- Learning Style: {style}
- Current Proficiency: {proficiency}

Teach me everything from basic to advanced, covering every minute detail in a structured and progressive manner, optimized for my {weeks}-week timeline. Adapt the content to my {style} learning style and {proficiency} proficiency level.

For each week, create a structured lesson plan that includes:
- **Weekly Goal**: A clear objective for what I should achieve by the end of the week.
- **Topics to Cover**: List the specific topics within {topic} that should be learned this week.
- **Learning Resources**: Suggest specific resources like YouTube videos, Coursera courses, Udemy courses, documentation, or blog posts. Provide direct links if possible.
- **Exercises**: Include 2-3 exercises to solidify my understanding of the week's topics. These should be practical exercises, coding challenges (if applicable to the topic), or questions that encourage critical thinking and application of the learned concepts.
- **Cheat Sheet**: Briefly summarize the key terms, definitions, or formulas from that week's content in bullet points.

Start with foundational concepts in Week 1 and progressively move to more advanced topics in subsequent weeks. Ensure the plan is suitable for a {weeks}-week course and tailored to my {style} learning style and {proficiency} proficiency level.

Format each week's plan clearly with headings and bullet points, starting each week with a "Week N:" heading.

Let's begin creating the {weeks}-week learning plan for {topic}."#;

/// Renders the tutor prompt. Pure: the same request always yields the same text.
pub fn build_prompt(request: &PlanRequest) -> String {
    // Topic goes last so braces inside it are never re-substituted.
    TUTOR_TEMPLATE
        .replace("{weeks}", &request.weeks().to_string())
        .replace("{style}", request.style().label())
        .replace("{proficiency}", request.proficiency().label())
        .replace("{topic}", request.topic())
}
