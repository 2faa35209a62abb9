use anyhow::Result;
use console_labs::{AppError, CalculatorConfig, CalculatorSession, Console};

fn run_session(input: &str) -> (console_labs::Result<usize>, String) {
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);
    let result = CalculatorSession::default()
        .run(&mut console)
        .map(|items| items.len());
    drop(console);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_single_line_item_total() -> Result<()> {
    let (result, out) = run_session("19.99\n3\nn\n");

    assert_eq!(result?, 1);
    assert!(out.starts_with(&"=".repeat(50)));
    assert!(out.contains("LINE ITEM CALCULATOR"));
    assert!(out.contains("Price:          $19.99\n"));
    assert!(out.contains("Quantity:       3\n"));
    assert!(out.contains("TOTAL:          $59.97\n"));
    assert!(out.ends_with("\nProgram ended. Goodbye!\n"));
    Ok(())
}

#[test]
fn test_invalid_inputs_reprompt_then_continue() -> Result<()> {
    let input = "free\n-1\n1500\nzero\n0\n2\nmaybe\nY\n0.5\n1\n n \n";
    let (result, out) = run_session(input);

    assert_eq!(result?, 2);
    assert!(out.contains(
        "ERROR: Invalid format. Price must be a number (float). Please try again."
    ));
    assert!(out.contains("ERROR: Price cannot be negative. Please try again."));
    assert!(out.contains(
        "ERROR: Invalid format. Quantity must be a whole number (integer). Please try again."
    ));
    assert!(out.contains("ERROR: Quantity must be a positive whole number. Please try again."));
    assert!(out.contains("Invalid input. Please enter 'y' for yes or 'n' for no."));

    assert!(out.contains("TOTAL:          $3,000.00\n"));
    assert!(out.contains("TOTAL:          $0.50\n"));
    assert_eq!(out.matches("Enter price: ").count(), 4);
    assert_eq!(out.matches("Enter another line item? (y/n): ").count(), 3);
    Ok(())
}

#[test]
fn test_closed_input_stops_session() {
    let (result, out) = run_session("10\n");

    assert!(matches!(result, Err(AppError::InputClosedError)));
    assert!(!out.contains("Goodbye"));
}

#[test]
fn test_custom_widths() -> Result<()> {
    let session = CalculatorSession::new(CalculatorConfig {
        separator_width: 20,
        label_width: 10,
    });
    let mut out = Vec::new();
    let mut console = Console::new("2.5\n4\nn\n".as_bytes(), &mut out);
    session.run(&mut console)?;
    drop(console);

    let out = String::from_utf8(out)?;
    assert!(out.starts_with(&format!("{}\n", "=".repeat(20))));
    assert!(out.contains("TOTAL:     $10.00\n"));
    Ok(())
}

#[test]
fn test_non_utf8_price_is_reprompted() -> Result<()> {
    let mut out = Vec::new();
    let mut console = Console::new(&b"\xff\xfe\n19.99\n3\nn\n"[..], &mut out);
    let items = CalculatorSession::default().run(&mut console)?;
    drop(console);

    let out = String::from_utf8(out)?;
    assert_eq!(items.len(), 1);
    assert_eq!(out.matches("Enter price: ").count(), 2);
    assert!(out.contains(
        "ERROR: Invalid format. Price must be a number (float). Please try again."
    ));
    assert!(out.contains("TOTAL:          $59.97\n"));
    Ok(())
}
