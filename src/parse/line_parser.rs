use crate::model::line::{Fields, Line};
use crate::parse::grammar::{
    PROJECT_MARKER, TAB, TASK_MARKER, count_indent, is_space, strip_trailing_tags, trim,
};
use crate::parse::tag_parser::extract_tags;

/// Classify one raw line (no trailing newline) as a project, task or comment.
///
/// Tasks are tried first, then projects; everything else is a comment.
/// Never fails: empty and whitespace-only lines are comments.
pub fn classify(text: &str) -> Line {
    let indent = count_indent(text);
    let body = &text[indent..];
    let tags = extract_tags(text);

    let fields = |title: &str| Fields {
        text: text.to_string(),
        title: title.to_string(),
        indent,
        tags,
    };

    if let Some(title) = task_title(body) {
        Line::Task(fields(title))
    } else if let Some(title) = project_title(body) {
        Line::Project(fields(title))
    } else {
        Line::Comment(fields(comment_title(text)))
    }
}

/// Title of a task body (`- Title @tags`), or `None` if it is not a task
fn task_title(body: &str) -> Option<&str> {
    body.strip_prefix(TASK_MARKER)
        .map(|rest| trim(strip_trailing_tags(rest)))
}

/// Title of a project body (`Title: @tags`), or `None` if it is not a project
fn project_title(body: &str) -> Option<&str> {
    // Must start right after the tabs; leading spaces make it a comment.
    if body.bytes().next().is_none_or(is_space) {
        return None;
    }
    // A colon at the very end wins over one before a tag block, so
    // `A @project:` keeps `@project` in its title.
    body.strip_suffix(PROJECT_MARKER)
        .or_else(|| strip_trailing_tags(body).strip_suffix(PROJECT_MARKER))
        .map(trim)
}

fn comment_title(text: &str) -> &str {
    let body = text.trim_start_matches([TAB, ' ']);
    trim(strip_trailing_tags(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::line::LineKind;

    fn kind(text: &str) -> LineKind {
        classify(text).kind()
    }

    fn title(text: &str) -> String {
        classify(text).title().to_string()
    }

    #[test]
    fn test_projects() {
        for text in [
            "Home tasks:",
            "\tCleaning:",
            "\t\tOther:",
            "Room organization: @weekly",
            "Drawings:",
            "\tPaintings: @daily @art",
            "\tPaper Drawings:",
            "Weird Project: @tag1  @tag2 @tag3",
            "Trip: @due(next friday)",
        ] {
            assert_eq!(kind(text), LineKind::Project, "{:?}", text);
        }
    }

    #[test]
    fn test_not_projects() {
        for text in [
            "Home tasks: ",
            "\t Cleaning:",
            "\t\tOther: ",
            "Room organization: @weekly mess",
            "- Drawings:",
            "\tPaintings: @daily ",
            "\tPaper Drawings: @one two @three",
            "\tAnother: @one @two @three ",
            "Comment line",
            "New line project:\n\n",
        ] {
            assert_ne!(kind(text), LineKind::Project, "{:?}", text);
        }
    }

    #[test]
    fn test_tasks() {
        for text in [
            "- Home tasks",
            "\t- Cleaning:",
            "\t\t- Other",
            "- Room organization @weekly",
            "\t\t\t- Drawings @daily everyday",
            "\t- Paintings: @daily @art",
            "\t- @many Paper Drawings @everyday",
            "- Weird task: @tag1  @tag2 @tag3",
        ] {
            assert_eq!(kind(text), LineKind::Task, "{:?}", text);
        }
    }

    #[test]
    fn test_not_tasks() {
        for text in [
            "Home tasks: ",
            "\t Cleaning:",
            "Room organization: @weekly mess",
            "-Drawings:",
            "\tPaper Drawings: @one two @three",
            "Comment line",
            "New line task:\n\n",
            " - I'm a mocker:",
            "-",
        ] {
            assert_ne!(kind(text), LineKind::Task, "{:?}", text);
        }
    }

    #[test]
    fn test_comments() {
        for text in [
            "Like a fine wine, really",
            "\tI've got blisters on my fingers!",
            "\t And in the end, the love you take, is equal to the love you make",
            "\t\tAre you a mod or a rocker?",
            "      Never could be any other way   ",
            "      Yesterday, all my troubles seemed so far @away",
            " - I'm a mocker:",
            "Here today: ",
            " Number nine, number nine, number nine, @number @nine @number(nine)",
        ] {
            assert_eq!(kind(text), LineKind::Comment, "{:?}", text);
        }
    }

    #[test]
    fn test_not_comments() {
        for text in [
            "- This is a task, not a comment",
            "\t- This is a task, not a comment",
            "This is a project, not a comment:",
            "\tThis is a project, not a comment:",
            "\t\tThis is a project, not a comment:",
        ] {
            assert_ne!(kind(text), LineKind::Comment, "{:?}", text);
        }
    }

    #[test]
    fn test_project_titles() {
        assert_eq!(title("Home tasks:"), "Home tasks");
        assert_eq!(title("A project : @the @tags"), "A project");
        assert_eq!(title("\t\tA project:"), "A project");
        assert_eq!(title("\t\tA @project:"), "A @project");
        assert_eq!(title("Weird Project: @tag1  @tag2 @tag3"), "Weird Project");
    }

    #[test]
    fn test_task_titles() {
        assert_eq!(title("- A task @with @tags"), "A task");
        assert_eq!(title("\t\t- A task:"), "A task:");
        assert_eq!(title("\t- @the tags @at_end"), "@the tags");
        assert_eq!(title("\t\t\t- Drawings @daily everyday"), "Drawings @daily everyday");
        assert_eq!(title("- @only @tags"), "");
    }

    #[test]
    fn test_comment_titles() {
        assert_eq!(title("   A comment"), "A comment");
        assert_eq!(title("\t\t  A comment:  "), "A comment:");
        assert_eq!(title("A comment @with @tags"), "A comment");
        assert_eq!(title("A comment @tags not @at_end"), "A comment @tags not");
        assert_eq!(title("Ship it @due(soon"), "Ship it @due(soon");
    }

    #[test]
    fn test_vertical_tab_separates_trailing_tags() {
        let line = classify("Task\x0b@a");
        assert!(line.is_comment());
        assert_eq!(line.title(), "Task");
        assert_eq!(line.tags().len(), 1);
    }

    #[test]
    fn test_task_wins_over_project() {
        let line = classify("- Pack for the trip:");
        assert!(line.is_task());
        assert_eq!(line.title(), "Pack for the trip:");
    }

    #[test]
    fn test_dash_without_space_can_head_a_project() {
        let line = classify("-Drawings:");
        assert!(line.is_project());
        assert_eq!(line.title(), "-Drawings");
    }

    #[test]
    fn test_indent_ignores_kind() {
        assert_eq!(classify("\t\t- task").indent(), 2);
        assert_eq!(classify("\tProject:").indent(), 1);
        assert_eq!(classify("\t\t\tcomment").indent(), 3);
        assert_eq!(classify("    spaces only").indent(), 0);
        assert_eq!(classify("\t  \tmixed").indent(), 1);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        for text in ["", "   ", "\t\t", " \t "] {
            let line = classify(text);
            assert!(line.is_comment(), "{:?}", text);
            assert_eq!(line.title(), "");
            assert!(line.tags().is_empty());
        }
        assert_eq!(classify("\t\t").indent(), 2);
    }

    #[test]
    fn test_text_is_preserved() {
        let text = "\t- Water plants @due(tonight)  ";
        assert_eq!(classify(text).text(), text);
    }

    #[test]
    fn test_home_tasks_scenario() {
        let line = classify("Home tasks:");
        assert!(line.is_project());
        assert_eq!(line.title(), "Home tasks");
        assert_eq!(line.indent(), 0);
        assert!(line.tags().is_empty());
    }

    #[test]
    fn test_first_thing_today_scenario() {
        let line = classify("\t- @first thing today: read @email");
        assert!(line.is_task());
        assert_eq!(line.indent(), 1);
        assert_eq!(line.title(), "@first thing today: read");
        let names: Vec<&str> = line.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "email"]);
        assert!(line.tags().iter().all(|t| t.value.is_none()));
    }

    #[test]
    fn test_weird_project_scenario() {
        let line = classify("Weird Project: @tag1  @tag2 @tag3");
        assert!(line.is_project());
        assert_eq!(line.tags().len(), 3);
    }

    #[test]
    fn test_comment_with_broken_block_scenario() {
        let line = classify("A comment @tags not @at_end");
        assert!(line.is_comment());
        assert_eq!(line.title(), "A comment @tags not");
        let names: Vec<&str> = line.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["tags", "at_end"]);
    }

    #[test]
    fn test_number_nine_scenario() {
        let line = classify("Number nine, number nine, number nine, @number @nine @number(nine)");
        assert!(line.is_comment());
        assert_eq!(line.title(), "Number nine, number nine, number nine,");
        assert_eq!(line.tags().len(), 3);
        assert_eq!(line.tags()[2].value.as_deref(), Some("nine"));
    }
}
