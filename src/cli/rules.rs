pub fn show_rules() {
    println!("\n{}", "=".repeat(60));
    println!("  RECOVERY_PINS - Rules");
    println!("{}\n", "=".repeat(60));

    println!("Dial one value into every node, then execute the bypass.");
    println!("The hidden operators chain the nodes strictly left to right.");
    println!("No precedence, just sequence.");
    println!();
    println!("  - Target value range: 24 - 100");
    println!("  - Operators are hidden - only deduction works");
    println!("  - Limited attempts before security lockout");
    println!("  - Time pressure based on difficulty");

    println!("\n{}", "=".repeat(60));
    println!("Run `recovery-pins play` to open a session");
    println!("Run `recovery-pins difficulty` to pick an intensity");
    println!("{}\n", "=".repeat(60));
}
