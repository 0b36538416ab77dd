use crate::config::FormConfig;
use crate::core::field::Field;
use crate::core::state::{FormState, SubmittedRecord};
use crate::ui::view::{DISPLAY_TEST_ID, ViewNode, ViewTree};

/// Build the view for the current state: the editable form while editing,
/// the frozen submission once a submit has been accepted.
pub fn render(state: &FormState, config: &FormConfig) -> ViewTree {
    let mut nodes = vec![ViewNode::Heading {
        text: config.header.clone(),
    }];

    match state.submitted() {
        Some(record) => nodes.push(render_submission(record, config)),
        None => {
            for field in Field::ALL {
                let field_config = config.field(field);
                nodes.push(ViewNode::Input {
                    field,
                    label: field_config.label.clone(),
                    placeholder: field_config.placeholder.clone(),
                    value: state.value(field).to_string(),
                });
                if let Some(message) = state.visible_error(field) {
                    nodes.push(ViewNode::Error {
                        field,
                        message: message.to_string(),
                    });
                }
            }
            nodes.push(ViewNode::Button {
                label: config.submit_label.clone(),
            });
        }
    }

    ViewTree::new(nodes)
}

fn render_submission(record: &SubmittedRecord, config: &FormConfig) -> ViewNode {
    let mut rows = vec![
        display_row(config, Field::FirstName, record.first_name()),
        display_row(config, Field::LastName, record.last_name()),
        display_row(config, Field::Email, record.email()),
    ];
    if let Some(message) = record.message() {
        rows.push(display_row(config, Field::Message, message));
    }

    ViewNode::Section {
        test_id: Some(DISPLAY_TEST_ID.to_string()),
        children: rows,
    }
}

fn display_row(config: &FormConfig, field: Field, value: &str) -> ViewNode {
    ViewNode::Section {
        test_id: None,
        children: vec![
            ViewNode::text(format!("{}:", config.field(field).label)),
            ViewNode::text_with_id(value, display_test_id(field)),
        ],
    }
}

pub fn display_test_id(field: Field) -> String {
    format!("{}Display", field.name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::{handle_input, handle_submit};
    use crate::ui::view::Role;

    #[test]
    fn initial_view_has_header_inputs_and_submit_without_errors() {
        let tree = render(&FormState::new(), &FormConfig::default());
        assert!(tree.find_by_text("Contact Form").is_some());
        assert_eq!(tree.find_all_by_role(Role::Textbox).len(), 4);
        assert!(tree.find_by_role(Role::Submit).is_some());
        assert!(tree.errors().is_empty());
    }

    #[test]
    fn errors_follow_their_input() {
        let state = handle_submit(FormState::new());
        let tree = render(&state, &FormConfig::default());
        let nodes = tree.nodes();
        let first_input = nodes
            .iter()
            .position(|node| node.field() == Some(Field::FirstName))
            .expect("first name input");
        assert_eq!(nodes[first_input + 1].test_id(), Some("error"));
        assert_eq!(nodes[first_input + 1].field(), Some(Field::FirstName));
    }

    #[test]
    fn submission_rows_use_display_test_ids() {
        let state = handle_input(FormState::new(), Field::FirstName, "test1");
        let state = handle_input(state, Field::LastName, "test2");
        let state = handle_input(state, Field::Email, "test@test.com");
        let state = handle_input(state, Field::Message, "hello");
        let tree = render(&handle_submit(state), &FormConfig::default());

        assert!(tree.find_by_role(Role::Textbox).is_none());
        let first = tree.find_by_test_id("firstnameDisplay").expect("first name row");
        assert_eq!(first.text_content(), "test1");
        let message = tree.find_by_test_id("messageDisplay").expect("message row");
        assert_eq!(message.text_content(), "hello");
        assert!(tree.find_by_text("Message:").is_some());
    }

    #[test]
    fn configured_labels_flow_into_view() {
        let config = FormConfig::from_yaml("header: Reach us\nemail:\n  label: E-mail\n")
            .expect("config");
        let tree = render(&FormState::new(), &config);
        assert!(tree.find_by_text("Reach us").is_some());
        assert_eq!(
            tree.find_by_label("E-mail").and_then(ViewNode::field),
            Some(Field::Email)
        );
    }
}
