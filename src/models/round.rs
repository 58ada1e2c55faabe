#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Applies the operator left-to-right. A zero divisor yields 0 rather
    /// than failing; wrong guesses are allowed to compute a junk value.
    pub fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0 {
                    0
                } else {
                    a / b
                }
            }
        }
    }
}

/// One node in the chain: a hidden correct value, the choices shown to the
/// player, and whatever the player has currently dialed in.
#[derive(Debug, Clone)]
pub struct Pin {
    pub correct_value: i32,
    pub options: Vec<i32>,
    pub selected_value: Option<i32>,
}

impl Pin {
    pub fn offers(&self, value: i32) -> bool {
        self.options.contains(&value)
    }
}

/// A generated puzzle instance. Immutable once generated; only the pins'
/// `selected_value` fields are touched afterwards, and only by the session.
#[derive(Debug, Clone)]
pub struct Round {
    pub target: i32,
    pub pins: Vec<Pin>,
    pub operators: Vec<Operator>,
}

impl Round {
    /// The solved chain spelled out, e.g. `6 * 5 + 2 = 32`.
    pub fn equation(&self) -> String {
        let mut parts = Vec::with_capacity(self.pins.len() * 2);
        for (i, pin) in self.pins.iter().enumerate() {
            if i > 0 {
                parts.push(self.operators[i - 1].symbol().to_string());
            }
            parts.push(pin.correct_value.to_string());
        }
        format!("{} = {}", parts.join(" "), self.target)
    }
}
