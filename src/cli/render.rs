use colored::Colorize;

use crate::pipeline::{LearningPlan, PlanRun};
use crate::search::{CourseResult, Platform};

pub(crate) fn print_run(run: &PlanRun) {
    print_plan(&run.plan);

    for message in run.diagnostics() {
        eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
    }
}

fn print_plan(plan: &LearningPlan) {
    println!();
    println!("{}", "Your Personalized Learning Plan".green().bold());
    println!();

    if plan.has_structured_weeks() {
        for week in &plan.weeks {
            println!("{}", format!("Week {}", week.week_number).cyan().bold());
            println!("{}", week.content);
            println!();
        }
    } else {
        println!(
            "{}",
            "No structured plan produced. Try generating again.".yellow()
        );
        println!();
    }

    println!("{}", "─".repeat(60).dimmed());
    println!("{}", "📚 Recommended Online Courses".bold());

    if plan.courses.is_empty() {
        println!(
            "{}",
            "No courses found at the moment. Try refining your search.".blue()
        );
        return;
    }

    for platform in Platform::ALL {
        let courses: Vec<_> = plan.courses_for(platform).collect();
        if courses.is_empty() {
            continue;
        }
        println!();
        println!("{}", format!("### {platform} Courses").magenta().bold());
        for course in courses {
            print_course(course);
        }
    }
}

fn print_course(course: &CourseResult) {
    println!();
    println!("  {}", course.title.bold());
    println!("  Platform: {}", course.platform);
    println!("  Rating:   {}", course.rating);
    println!("  Link:     {}", course.url.underline());
    println!("  {}", course.description.trim());
}
