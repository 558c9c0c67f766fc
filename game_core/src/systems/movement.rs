use crate::FallingTarget;

/// Advance the target by its fall speed
pub fn fall(target: &mut FallingTarget) {
    target.pos.y += target.speed;
}

/// Whether the target's bottom edge has reached the bottom of the display
pub fn reached_bottom(target: &FallingTarget) -> bool {
    target.pos.y + target.size() >= target.display.y
}
