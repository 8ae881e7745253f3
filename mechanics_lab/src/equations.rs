//! Equation cards for each experiment

use common::{format_equation_card, Equation};

use crate::session::ExperimentKind;

impl ExperimentKind {
    pub fn equations(self) -> &'static [Equation] {
        match self {
            ExperimentKind::Projectile => PROJECTILE_EQUATIONS,
            ExperimentKind::Pendulum => PENDULUM_EQUATIONS,
            ExperimentKind::Collision => COLLISION_EQUATIONS,
            ExperimentKind::Energy => ENERGY_EQUATIONS,
        }
    }

    pub fn variables(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ExperimentKind::Projectile => PROJECTILE_VARIABLES,
            ExperimentKind::Pendulum => PENDULUM_VARIABLES,
            ExperimentKind::Collision => COLLISION_VARIABLES,
            ExperimentKind::Energy => ENERGY_VARIABLES,
        }
    }

    /// Plain-text card with the equations and variable glossary
    pub fn equation_card(self) -> String {
        format_equation_card(self.title(), self.equations(), self.variables())
    }
}

// ============================================================================
// Projectile Motion
// ============================================================================

pub const PROJECTILE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Launch Components",
        formula: "vx = v₀·cos θ,  vy = v₀·sin θ",
        description: "Initial velocity split along the axes",
    },
    Equation {
        name: "Position",
        formula: "x = x₀ + vx·t,  y = y₀ + vy·t − ½·g·t²",
        description: "No drag: horizontal motion is uniform",
    },
    Equation {
        name: "Range",
        formula: "R = v₀²·sin 2θ / g",
        description: "Horizontal distance on level ground",
    },
    Equation {
        name: "Time of Flight",
        formula: "T = 2·v₀·sin θ / g",
        description: "Time to return to launch height",
    },
    Equation {
        name: "Maximum Height",
        formula: "H = v₀²·sin²θ / 2g",
        description: "Apex above the launch point",
    },
];

pub const PROJECTILE_VARIABLES: &[(&str, &str)] = &[
    ("v₀", "Launch speed"),
    ("θ", "Launch angle"),
    ("g", "Gravitational acceleration"),
    ("R", "Range"),
    ("T", "Flight time"),
    ("H", "Maximum height"),
];

// ============================================================================
// Simple Pendulum
// ============================================================================

pub const PENDULUM_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Equation of Motion",
        formula: "θ̈ = −(g/L)·sin θ",
        description: "Restoring torque of gravity",
    },
    Equation {
        name: "Small-Angle Period",
        formula: "T = 2π·√(L/g)",
        description: "Independent of mass and (small) amplitude",
    },
    Equation {
        name: "Bob Position",
        formula: "x = L·sin θ,  y = h − L·cos θ",
        description: "Pivot at height h",
    },
    Equation {
        name: "Bob Speed",
        formula: "v = |ω·L|",
        description: "Tangential speed on the arc",
    },
];

pub const PENDULUM_VARIABLES: &[(&str, &str)] = &[
    ("θ", "Angle from vertical"),
    ("ω", "Angular velocity"),
    ("L", "Rope length"),
    ("g", "Gravitational acceleration"),
    ("h", "Pivot height"),
    ("T", "Period"),
];

// ============================================================================
// Elastic Collision
// ============================================================================

pub const COLLISION_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Conservation of Momentum",
        formula: "m₁v₁ + m₂v₂ = m₁v₁' + m₂v₂'",
        description: "Holds for every collision",
    },
    Equation {
        name: "Conservation of Kinetic Energy",
        formula: "½m₁v₁² + ½m₂v₂² = ½m₁v₁'² + ½m₂v₂'²",
        description: "Holds for elastic collisions",
    },
    Equation {
        name: "Final Velocity (body 1)",
        formula: "v₁' = (v₁(m₁−m₂) + 2m₂v₂) / (m₁+m₂)",
        description: "Closed form, 1-D",
    },
    Equation {
        name: "Final Velocity (body 2)",
        formula: "v₂' = (v₂(m₂−m₁) + 2m₁v₁) / (m₁+m₂)",
        description: "Equal masses simply swap velocities",
    },
];

pub const COLLISION_VARIABLES: &[(&str, &str)] = &[
    ("m₁, m₂", "Masses of the boxes"),
    ("v₁, v₂", "Velocities before contact"),
    ("v₁', v₂'", "Velocities after contact"),
];

// ============================================================================
// Energy Conservation on a Ramp
// ============================================================================

pub const ENERGY_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Mechanical Energy",
        formula: "E = KE + PE = m·g·h₀",
        description: "Constant without friction",
    },
    Equation {
        name: "Kinetic Energy",
        formula: "KE = ½·m·v²",
        description: "Energy of motion",
    },
    Equation {
        name: "Potential Energy",
        formula: "PE = m·g·h",
        description: "Energy of height",
    },
    Equation {
        name: "Speed from Height",
        formula: "v = √(2g·(h₀ − h))",
        description: "Mass cancels out",
    },
];

pub const ENERGY_VARIABLES: &[(&str, &str)] = &[
    ("m", "Mass of the ball"),
    ("g", "Gravitational acceleration"),
    ("h₀", "Release height"),
    ("h", "Current height"),
    ("v", "Speed along the track"),
];
