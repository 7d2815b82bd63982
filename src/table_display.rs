use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;
use polly_client::Poll;

pub fn display_polls(polls: &[Poll]) {
    if polls.is_empty() {
        println!("{}", "No polls found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = ["id", "question", "owner", "created", "options"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    for poll in polls {
        let created = poll
            .created_at_parsed()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| poll.created_at.clone());
        let options: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();

        table.add_row(vec![
            poll.id.to_string(),
            poll.question.clone(),
            poll.owner_id.to_string(),
            created,
            options.join(", "),
        ]);
    }

    println!("{table}");
    println!("\n{}", format!("Retrieved {} polls", polls.len()).green());
}
