/// Game tuning parameters for the falling target
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Display
    pub const DISPLAY_WIDTH: u32 = 640;
    pub const DISPLAY_HEIGHT: u32 = 480;

    // Sprite
    pub const SPRITE_SIZE: u32 = 50;
    pub const SPRITE_OPAQUE_LEVEL: u8 = 1; // grayscale above this is opaque

    // Fall speed, pixels per tick (max is exclusive)
    pub const INITIAL_SPEED: u32 = 15;
    pub const MISS_SPEED_MIN: u32 = 10;
    pub const MISS_SPEED_MAX: u32 = 15;
    pub const CATCH_SPEED_MIN: u32 = 10;
    pub const CATCH_SPEED_MAX: u32 = 20;

    // Catch flash paints every Nth row white
    pub const FLASH_ROW_STRIDE: usize = 2;
}
