//! Example game demonstrating engine features
//!
//! A player sprite walks an endless plane divided into chunks; the debug
//! HUD shows its absolute and chunk coordinates. Movement keys come from
//! `settings.yaml`, Escape quits, F3 toggles the HUD, and clicking
//! teleports the player to the cursor.

use tessella::prelude::*;
use tessella::winit::event::MouseButton;

const SETTINGS_PATH: &str = "settings.yaml";
const TILE_SIZE: u32 = 16;
const CHUNK_SIZE: u32 = 8;
const PLAYER_SPEED: f32 = 220.0;
const PLAYER_START: Vec2 = Vec2::new(100.0, 100.0);
const PLACEHOLDER_COLOR: Color = Color::rgb(231, 111, 81);
const CHUNK_OUTLINE: Color = Color::rgb(60, 64, 78);

/// The player-controlled sprite.
struct Player {
    position: Vec2,
    rect: Rect,
    speed: f32,
    sprite: Surface,
    grid: WorldGrid,
    bindings: BindingSet,
    current_chunk: IVec2,
}

impl Player {
    fn new(position: Vec2, sprite: Surface, grid: WorldGrid, bindings: BindingSet) -> Self {
        let size = Vec2::new(sprite.width() as f32, sprite.height() as f32);
        Self {
            position,
            rect: Rect::from_position_size(position, size),
            speed: PLAYER_SPEED,
            sprite,
            grid,
            bindings,
            current_chunk: grid.chunk_at(position),
        }
    }

    /// The chunk the player currently stands in.
    fn chunk(&self) -> IVec2 {
        self.current_chunk
    }

    /// Move along `direction` for `dt` seconds.
    ///
    /// The position is kept to one decimal place; holding two movement keys
    /// moves sqrt(2) times faster than one, matching the all-or-nothing feel
    /// of keyboard movement.
    fn apply_movement(&mut self, direction: Vec2, dt: f32) {
        let velocity = direction * self.speed * dt;
        self.position = (self.position + velocity).round_dp(1);
        self.sync_derived_state();
    }

    /// Jump straight to a world position.
    fn teleport(&mut self, position: Vec2) {
        self.position = position.round_dp(1);
        self.sync_derived_state();
    }

    fn sync_derived_state(&mut self) {
        self.rect.set_position(self.position);
        let chunk = self.grid.chunk_at(self.position);
        if chunk != self.current_chunk {
            log::debug!("Entered chunk ({}, {})", chunk.x, chunk.y);
            self.current_chunk = chunk;
        }
    }
}

impl Entity for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let direction = self.bindings.direction(&ctx.input);
        self.apply_movement(direction, ctx.time.delta_seconds());

        ctx.debug.add_line(format!(
            "Absolute | x: {:.1} y: {:.1}",
            self.position.x, self.position.y
        ));
        ctx.debug.add_line(format!(
            "Chunk    | x: {} y: {}",
            self.current_chunk.x, self.current_chunk.y
        ));
    }

    fn draw(&self, frame: &mut Surface, scroll: Vec2) {
        let screen = self.position - scroll;
        frame.blit(&self.sprite, screen.x.round() as i32, screen.y.round() as i32);
    }
}

/// Everything that can live in the demo world.
///
/// A tagged enum keeps dispatch static while letting each kind carry its
/// own state.
enum WorldEntity {
    Player(Player),
}

impl Entity for WorldEntity {
    fn position(&self) -> Vec2 {
        match self {
            Self::Player(player) => player.position(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Self::Player(player) => player.rect(),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        match self {
            Self::Player(player) => player.update(ctx),
        }
    }

    fn draw(&self, frame: &mut Surface, scroll: Vec2) {
        match self {
            Self::Player(player) => player.draw(frame, scroll),
        }
    }
}

/// Demo game walking a sprite across chunks.
struct ChunkDemo {
    bindings: BindingSet,
    camera: Camera2D,
    grid: WorldGrid,
    entities: Vec<WorldEntity>,
}

impl ChunkDemo {
    fn new(bindings: BindingSet) -> Self {
        Self {
            bindings,
            camera: Camera2D::new(),
            grid: WorldGrid::new(TILE_SIZE, CHUNK_SIZE),
            entities: Vec::new(),
        }
    }

    fn player(&self) -> Option<&Player> {
        self.entities.iter().find_map(|entity| match entity {
            WorldEntity::Player(player) => Some(player),
        })
    }

    fn player_mut(&mut self) -> Option<&mut Player> {
        self.entities.iter_mut().find_map(|entity| match entity {
            WorldEntity::Player(player) => Some(player),
        })
    }
}

impl Game for ChunkDemo {
    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!("Initializing chunk demo");

        let sprite = ctx.sprites.get("player").cloned().unwrap_or_else(|| {
            log::warn!("No \"player\" sprite found, using a placeholder");
            Surface::solid(TILE_SIZE, TILE_SIZE, PLACEHOLDER_COLOR)
        });

        let player = Player::new(PLAYER_START, sprite, self.grid, self.bindings.clone());
        self.entities.push(WorldEntity::Player(player));

        ctx.debug.enabled = true;
        log::info!("Chunk demo initialized");
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        if ctx.input.is_key_pressed(KeyCode::Escape) {
            ctx.quit();
            return;
        }
        if ctx.input.is_key_just_pressed(KeyCode::F3) {
            ctx.debug.toggle();
        }

        for entity in &mut self.entities {
            entity.update(ctx);
        }

        // click to teleport the player under the cursor
        if ctx.input.is_mouse_just_pressed(MouseButton::Left) {
            let target = self.camera.to_world(ctx.input.cursor_position());
            if let Some(player) = self.player_mut() {
                player.teleport(target);
            }
        }

        // keep the player centered
        let viewport = Vec2::new(ctx.frame.width() as f32, ctx.frame.height() as f32);
        if let Some(target) = self.player().map(|player| player.rect().center()) {
            self.camera.center_on(target, viewport);
        }

        let cursor = ctx.input.cursor_position();
        ctx.debug
            .add_line(format!("Cursor   | x: {:.0} y: {:.0}", cursor.x, cursor.y));
    }

    fn render(&mut self, ctx: &mut EngineContext) {
        // outline the chunk the player stands in
        if let Some(player) = self.player() {
            let origin = self.camera.to_screen(self.grid.chunk_origin(player.chunk()));
            draw_rect_outline(
                &mut ctx.frame,
                origin.x.round() as i32,
                origin.y.round() as i32,
                self.grid.chunk_span() as i32,
                CHUNK_OUTLINE,
            );
        }

        for entity in &self.entities {
            entity.draw(&mut ctx.frame, self.camera.scroll);
        }
    }

    fn shutdown(&mut self, _ctx: &mut EngineContext) {
        log::info!("Chunk demo shutting down");
    }
}

fn draw_rect_outline(frame: &mut Surface, x: i32, y: i32, size: i32, color: Color) {
    for i in 0..size {
        frame.put_pixel(x + i, y, color);
        frame.put_pixel(x + i, y + size - 1, color);
        frame.put_pixel(x, y + i, color);
        frame.put_pixel(x + size - 1, y + i, color);
    }
}

fn main() {
    let settings = match Settings::load(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load {SETTINGS_PATH}: {e}");
            return;
        }
    };

    let bindings = match settings.keybinds.resolve() {
        Ok(bindings) => bindings,
        Err(e) => {
            eprintln!("Invalid keybinds: {e}");
            return;
        }
    };

    let config = EngineConfig::default()
        .with_title("Tessella Demo")
        .with_size(1280, 720)
        .with_vsync(true);

    let game = ChunkDemo::new(bindings);
    let engine = match Engine::new(config, game) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Engine error: {}", e);
            return;
        }
    };

    if let Err(e) = engine.run() {
        eprintln!("Engine error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessella::winit::event::ElementState;

    fn test_player() -> Player {
        Player::new(
            PLAYER_START,
            Surface::solid(TILE_SIZE, TILE_SIZE, PLACEHOLDER_COLOR),
            WorldGrid::new(TILE_SIZE, CHUNK_SIZE),
            BindingSet::wasd(),
        )
    }

    #[test]
    fn test_settings_to_movement_scenario() {
        // full chain: key labels -> bindings -> key event -> displacement
        let bindings = Keybinds::wasd().resolve().unwrap();
        let mut input = Input::new();
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);

        let mut player = test_player();
        player.apply_movement(bindings.direction(&input), 0.1);

        assert_eq!(player.position(), Vec2::new(78.0, 100.0));
    }

    #[test]
    fn test_movement_step() {
        let mut player = test_player();

        // one 10 fps frame moving right: 220 px/s * 0.1 s
        player.apply_movement(Vec2::new(1.0, 0.0), 0.1);

        assert_eq!(player.position(), Vec2::new(122.0, 100.0));
        assert_eq!(player.rect().position(), player.position());
    }

    #[test]
    fn test_position_rounded_to_one_decimal() {
        let mut player = test_player();

        player.apply_movement(Vec2::new(1.0, 1.0), 0.016);

        // 220 * 0.016 = 3.52, rounded to one decimal
        assert_eq!(player.position(), Vec2::new(103.5, 103.5));
    }

    #[test]
    fn test_chunk_updates_on_crossing() {
        let mut player = test_player();
        player.teleport(Vec2::new(120.0, 0.0));
        assert_eq!(player.chunk(), IVec2::new(0, 0));

        // 22 px right crosses the 128 px chunk boundary
        player.apply_movement(Vec2::new(1.0, 0.0), 0.1);
        assert_eq!(player.chunk(), IVec2::new(1, 0));
    }

    #[test]
    fn test_teleport_negative_chunk() {
        let mut player = test_player();
        player.teleport(Vec2::new(-5.0, 3.27));

        assert_eq!(player.position(), Vec2::new(-5.0, 3.3));
        assert_eq!(player.chunk(), IVec2::new(-1, 0));
    }

    #[test]
    fn test_world_entity_delegates() {
        let player = test_player();
        let position = player.position();
        let entity = WorldEntity::Player(player);

        assert_eq!(entity.position(), position);
        assert_eq!(entity.rect().position(), position);
    }

    #[test]
    fn test_draw_offsets_by_scroll() {
        let mut player = test_player();
        player.teleport(Vec2::new(3.0, 3.0));
        let entity = WorldEntity::Player(player);

        let mut frame = Surface::new(8, 8);
        entity.draw(&mut frame, Vec2::ZERO);
        assert_eq!(frame.get_pixel(3, 3), Some(PLACEHOLDER_COLOR));
        assert_eq!(frame.get_pixel(2, 2), Some(Color::TRANSPARENT));

        // scrolling one pixel right shifts the sprite one pixel left
        let mut frame = Surface::new(8, 8);
        entity.draw(&mut frame, Vec2::new(1.0, 0.0));
        assert_eq!(frame.get_pixel(2, 3), Some(PLACEHOLDER_COLOR));
    }
}
