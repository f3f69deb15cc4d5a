// Character entity and management

use std::time::Duration;

use glam::Vec2;
use log::{debug, info};

use crate::engine::renderer::{Camera, Renderer, Sprite};

use super::direction::{Direction, DirectionalInput};
use super::profile::CharacterProfile;
use super::selection::SelectionTester;
use super::state::{CharacterState, CharacterStateMachine};
use super::ConfigError;

/// Unique identifier for a character
pub type CharacterId = u32;

/// Z-order of base sprites; outlines go one layer above
const CHARACTER_LAYER: f32 = 1.0;

/// A walking sprite character in the scene
#[derive(Debug, Clone)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    profile: CharacterProfile,
    /// Top-left of the sprite in world space
    position: Vec2,
    state_machine: CharacterStateMachine,
    selection: SelectionTester,
    is_selected: bool,
}

impl Character {
    /// Create a new character, idle and facing south
    pub fn new(id: CharacterId, profile: CharacterProfile, position: Vec2) -> Result<Self, ConfigError> {
        profile.validate()?;

        Ok(Self {
            id,
            state_machine: CharacterStateMachine::new(profile.frame_interval),
            selection: SelectionTester::new(profile.hit_box),
            profile,
            position,
            is_selected: false,
        })
    }

    /// Run one tick: walk, advance the walk cycle and refresh selection.
    ///
    /// `cursor_world` is the cursor already un-projected through the camera.
    pub fn update<I>(&mut self, input: &I, cursor_world: Vec2, now: Duration)
    where
        I: DirectionalInput + ?Sized,
    {
        let before = self.state();

        let held = if self.profile.controllable {
            input.held_direction()
        } else {
            None
        };

        if let Some(direction) = held {
            self.position += direction.step_delta(self.profile.step);
        }
        self.state_machine.update(held, now);

        self.log_transition(before, self.state());

        let selected = self.selection.is_hit(cursor_world, self.position);
        if selected != self.is_selected {
            debug!(
                "{} #{} {}",
                self.profile.name,
                self.id,
                if selected { "selected" } else { "deselected" }
            );
        }
        self.is_selected = selected;
    }

    fn log_transition(&self, before: CharacterState, after: CharacterState) {
        if before.is_moving() != after.is_moving() {
            debug!(
                "{} #{} {} facing {:?}",
                self.profile.name,
                self.id,
                if after.is_moving() { "started walking" } else { "stopped" },
                after.direction()
            );
        } else if before.direction() != after.direction() {
            debug!(
                "{} #{} turned {:?}",
                self.profile.name,
                self.id,
                after.direction()
            );
        }
    }

    /// Atlas frame to draw this tick
    pub fn current_atlas_index(&self) -> u32 {
        let state = self.state();
        self.profile.animations.frame(state.direction(), state.pose())
    }

    /// Outline frame to draw on top, when selected and the type has outlines.
    ///
    /// `None` as well if the offset would overflow the frame index.
    pub fn highlight_atlas_index(&self) -> Option<u32> {
        if !self.is_selected {
            return None;
        }
        self.profile
            .highlight
            .and_then(|highlight| self.current_atlas_index().checked_add(highlight.offset))
    }

    pub fn world_position(&self) -> Vec2 {
        self.position
    }

    pub fn name(&self) -> &str {
        self.profile.name
    }

    pub fn state(&self) -> CharacterState {
        self.state_machine.state()
    }

    pub fn direction(&self) -> Direction {
        self.state_machine.direction()
    }

    pub fn is_moving(&self) -> bool {
        self.state_machine.is_moving()
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Hand this character's sprites to the renderer
    pub fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        let screen = camera.world_to_screen(self.position);
        let size = self.profile.draw_size * camera.zoom;

        renderer.draw_sprite(
            &Sprite::new(self.profile.sheet, self.current_atlas_index(), screen, size)
                .with_z_order(CHARACTER_LAYER),
        );

        if let (Some(highlight), Some(frame)) = (self.profile.highlight, self.highlight_atlas_index()) {
            renderer.draw_sprite(
                &Sprite::new(highlight.sheet, frame, screen, size)
                    .with_z_order(CHARACTER_LAYER + 1.0),
            );
        }
    }
}

/// Owns every character in the scene
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn a new character
    pub fn spawn(&mut self, profile: CharacterProfile, position: Vec2) -> Result<CharacterId, ConfigError> {
        let id = self.next_id;
        let character = Character::new(id, profile, position)?;
        self.next_id += 1;

        info!(
            "Spawned {} #{} at ({}, {})",
            character.name(),
            id,
            position.x,
            position.y
        );
        self.characters.push(character);

        Ok(id)
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Tick every character
    pub fn update<I>(&mut self, input: &I, cursor_world: Vec2, now: Duration)
    where
        I: DirectionalInput + ?Sized,
    {
        for character in &mut self.characters {
            character.update(input, cursor_world, now);
        }
    }

    /// Draw every character that overlaps the viewport
    pub fn draw(&self, camera: &Camera, renderer: &mut dyn Renderer) {
        let viewport = camera.viewport_bounds();
        for character in &self.characters {
            if viewport.intersects_rect(character.position, character.profile.draw_size) {
                character.draw(camera, renderer);
            }
        }
    }

    /// Remove a character by ID
    #[allow(dead_code)]
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(pos))
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }

    /// Characters currently under the cursor
    pub fn selected(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::RecordingRenderer;
    use crate::game::characters::animation::WalkFrame;
    use crate::game::characters::direction::NoInput;
    use crate::game::characters::profile::{Highlight, PEASANT_SHEET, RULER_HIGHLIGHT_SHEET, RULER_SHEET};
    use approx::assert_relative_eq;

    /// Keys held for one tick
    struct Held(Vec<Direction>);

    impl DirectionalInput for Held {
        fn is_held(&self, direction: Direction) -> bool {
            self.0.contains(&direction)
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn ruler_at(x: f32, y: f32) -> Character {
        Character::new(0, CharacterProfile::ruler().unwrap(), Vec2::new(x, y)).unwrap()
    }

    /// Walk frame showing, or `None` while idle
    fn walk_frame(character: &Character) -> Option<WalkFrame> {
        match character.state() {
            CharacterState::Walking(_, frame) => Some(frame),
            CharacterState::Idle(_) => None,
        }
    }

    /// Cursor far away from anything under test
    const NOWHERE: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    #[test]
    fn test_initial_state() {
        let ruler = ruler_at(100.0, 100.0);
        assert_eq!(ruler.direction(), Direction::South);
        assert!(!ruler.is_moving());
        assert!(!ruler.is_selected());
        assert_eq!(ruler.current_atlas_index(), 8);
        assert_eq!(ruler.highlight_atlas_index(), None);
    }

    #[test]
    fn test_invalid_profile_fails_fast() {
        let mut profile = CharacterProfile::ruler().unwrap();
        profile.frame_interval = Duration::ZERO;
        assert!(Character::new(0, profile, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_idle_ticks_show_idle_pose() {
        let mut ruler = ruler_at(0.0, 0.0);

        for tick in 0..10 {
            ruler.update(&NoInput, NOWHERE, ms(tick * 16));
            assert!(!ruler.is_moving());
            assert_eq!(ruler.state(), CharacterState::Idle(Direction::South));
            assert_eq!(ruler.current_atlas_index(), 8);
        }
        assert_eq!(ruler.world_position(), Vec2::ZERO);
    }

    #[test]
    fn test_walk_south_scenario() {
        let mut ruler = ruler_at(100.0, 100.0);
        let south = Held(vec![Direction::South]);

        ruler.update(&south, NOWHERE, ms(0));
        assert_eq!(ruler.current_atlas_index(), 7);

        ruler.update(&south, NOWHERE, ms(150));
        assert_eq!(ruler.current_atlas_index(), 9);

        ruler.update(&south, NOWHERE, ms(300));
        assert_eq!(ruler.current_atlas_index(), 7);

        // Three ticks of two units each
        assert_eq!(ruler.world_position(), Vec2::new(100.0, 106.0));
    }

    #[test]
    fn test_frame_toggles_once_per_interval() {
        let mut ruler = ruler_at(0.0, 0.0);
        let north = Held(vec![Direction::North]);

        let mut toggles = 0;
        let mut last = WalkFrame::First;
        // 16ms ticks from 0 to 592ms, three full intervals
        for tick in 0..=(600 / 16) {
            ruler.update(&north, NOWHERE, ms(tick * 16));
            let frame = walk_frame(&ruler).unwrap();
            if frame != last {
                toggles += 1;
                last = frame;
            }
        }

        // Toggles happen at 160, 320, 480 (first tick at or past each interval)
        assert_eq!(toggles, 3);
    }

    #[test]
    fn test_toggles_with_exact_interval_ticks() {
        let mut ruler = ruler_at(0.0, 0.0);
        let west = Held(vec![Direction::West]);

        let mut frames = Vec::new();
        for k in 0..=4 {
            ruler.update(&west, NOWHERE, ms(k * 150));
            frames.push(walk_frame(&ruler).unwrap().number());
        }

        assert_eq!(frames, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_release_resets_immediately() {
        let mut ruler = ruler_at(0.0, 0.0);
        let east = Held(vec![Direction::East]);

        ruler.update(&east, NOWHERE, ms(0));
        ruler.update(&east, NOWHERE, ms(150));
        assert_eq!(walk_frame(&ruler), Some(WalkFrame::Second));

        ruler.update(&NoInput, NOWHERE, ms(160));
        assert!(!ruler.is_moving());
        assert_eq!(walk_frame(&ruler), None);
        // East idle
        assert_eq!(ruler.current_atlas_index(), 11);

        // Walking again restarts on the first walk frame, even within the old interval
        ruler.update(&east, NOWHERE, ms(170));
        assert_eq!(walk_frame(&ruler), Some(WalkFrame::First));
        ruler.update(&east, NOWHERE, ms(310));
        assert_eq!(walk_frame(&ruler), Some(WalkFrame::First));
    }

    #[test]
    fn test_direction_changes_on_same_tick() {
        let mut ruler = ruler_at(0.0, 0.0);

        ruler.update(&Held(vec![Direction::South]), NOWHERE, ms(0));
        ruler.update(&Held(vec![Direction::North]), NOWHERE, ms(16));

        assert_eq!(ruler.direction(), Direction::North);
        // North walk 1
        assert_eq!(ruler.current_atlas_index(), 16);
    }

    #[test]
    fn test_south_wins_over_north() {
        let mut ruler = ruler_at(50.0, 50.0);
        let both = Held(vec![Direction::North, Direction::South]);

        ruler.update(&both, NOWHERE, ms(0));

        assert_eq!(ruler.direction(), Direction::South);
        // Only the south step is applied
        assert_eq!(ruler.world_position(), Vec2::new(50.0, 52.0));
    }

    #[test]
    fn test_east_key_walks_left() {
        // Flags the inverted horizontal pairing: East faces east but moves -x.
        let mut ruler = ruler_at(50.0, 50.0);

        ruler.update(&Held(vec![Direction::East]), NOWHERE, ms(0));
        assert_eq!(ruler.world_position(), Vec2::new(48.0, 50.0));
        assert_eq!(ruler.current_atlas_index(), 10);

        ruler.update(&Held(vec![Direction::West]), NOWHERE, ms(16));
        assert_eq!(ruler.world_position(), Vec2::new(50.0, 50.0));
        assert_eq!(ruler.current_atlas_index(), 13);
    }

    #[test]
    fn test_selection_boundaries() {
        let mut ruler = ruler_at(100.0, 100.0);

        ruler.update(&NoInput, Vec2::new(164.0, 164.0), ms(0));
        assert!(ruler.is_selected());

        ruler.update(&NoInput, Vec2::new(165.0, 100.0), ms(16));
        assert!(!ruler.is_selected());
    }

    #[test]
    fn test_selection_uses_position_after_move() {
        let mut ruler = ruler_at(100.0, 100.0);

        // Cursor sits one unit below the box; walking south brings it inside
        ruler.update(&Held(vec![Direction::South]), Vec2::new(100.0, 165.0), ms(0));
        assert!(ruler.is_selected());
    }

    #[test]
    fn test_highlight_index_offset() {
        let mut ruler = ruler_at(0.0, 0.0);
        ruler.update(&Held(vec![Direction::South]), Vec2::new(10.0, 10.0), ms(0));

        assert!(ruler.is_selected());
        assert_eq!(ruler.current_atlas_index(), 7);
        assert_eq!(ruler.highlight_atlas_index(), Some(36));
    }

    #[test]
    fn test_overflowing_highlight_offset_yields_none() {
        let mut profile = CharacterProfile::ruler().unwrap();
        profile.highlight = Some(Highlight {
            sheet: RULER_HIGHLIGHT_SHEET,
            offset: u32::MAX,
        });
        let mut ruler = Character::new(0, profile, Vec2::ZERO).unwrap();

        ruler.update(&NoInput, Vec2::new(10.0, 10.0), ms(0));

        assert!(ruler.is_selected());
        assert_eq!(ruler.highlight_atlas_index(), None);

        let mut renderer = RecordingRenderer::default();
        ruler.draw(&Camera::new(Vec2::ZERO, 800.0, 600.0), &mut renderer);
        assert_eq!(renderer.sprites.len(), 1);
    }

    #[test]
    fn test_peasant_has_no_highlight_and_ignores_keys() {
        let mut peasant =
            Character::new(1, CharacterProfile::peasant().unwrap(), Vec2::new(0.0, 0.0)).unwrap();

        peasant.update(&Held(vec![Direction::South]), Vec2::new(1.0, 1.0), ms(0));

        assert!(peasant.is_selected());
        assert_eq!(peasant.highlight_atlas_index(), None);
        assert!(!peasant.is_moving());
        assert_eq!(peasant.world_position(), Vec2::ZERO);
        assert_eq!(peasant.current_atlas_index(), 20);
    }

    #[test]
    fn test_controllable_peasant_walks() {
        let mut profile = CharacterProfile::peasant().unwrap();
        profile.controllable = true;
        let mut peasant = Character::new(1, profile, Vec2::ZERO).unwrap();

        peasant.update(&Held(vec![Direction::North]), NOWHERE, ms(0));
        assert_eq!(peasant.current_atlas_index(), 28);
        assert_eq!(peasant.world_position(), Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_draw_emits_base_then_outline() {
        let mut ruler = ruler_at(100.0, 50.0);
        ruler.update(&NoInput, Vec2::new(110.0, 60.0), ms(0));

        let mut camera = Camera::new(Vec2::new(20.0, 10.0), 800.0, 600.0);
        camera.set_zoom(2.0);

        let mut renderer = RecordingRenderer::default();
        ruler.draw(&camera, &mut renderer);

        assert_eq!(renderer.sprites.len(), 2);
        let base = renderer.sprites[0];
        assert_eq!(base.sheet, RULER_SHEET);
        assert_eq!(base.frame, 8);
        assert_relative_eq!(base.position.x, 160.0);
        assert_relative_eq!(base.position.y, 80.0);
        assert_eq!(base.size, Vec2::splat(128.0));

        let outline = renderer.sprites[1];
        assert_eq!(outline.sheet, RULER_HIGHLIGHT_SHEET);
        assert_eq!(outline.frame, 8 + 29);
        assert_eq!(outline.position, base.position);
        assert!(outline.z_order > base.z_order);
    }

    #[test]
    fn test_draw_without_selection() {
        let ruler = ruler_at(0.0, 0.0);
        let camera = Camera::new(Vec2::ZERO, 800.0, 600.0);

        let mut renderer = RecordingRenderer::default();
        ruler.draw(&camera, &mut renderer);
        assert_eq!(renderer.sprites.len(), 1);
    }

    #[test]
    fn test_manager_spawn_and_lookup() {
        let mut manager = CharacterManager::new();
        let ruler = manager.spawn(CharacterProfile::ruler().unwrap(), Vec2::new(10.0, 10.0)).unwrap();
        let peasant = manager.spawn(CharacterProfile::peasant().unwrap(), Vec2::new(90.0, 10.0)).unwrap();

        assert_ne!(ruler, peasant);
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(ruler).map(|c| c.name()), Some("Ruler"));
        assert_eq!(manager.get(peasant).map(|c| c.name()), Some("Peasant"));
        assert!(manager.get(99).is_none());
    }

    #[test]
    fn test_manager_spawn_rejects_bad_profile() {
        let mut manager = CharacterManager::new();
        let mut profile = CharacterProfile::ruler().unwrap();
        profile.step = 0.0;

        assert!(manager.spawn(profile, Vec2::ZERO).is_err());
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_manager_update_drives_only_controllable() {
        let mut manager = CharacterManager::new();
        let ruler = manager.spawn(CharacterProfile::ruler().unwrap(), Vec2::new(0.0, 0.0)).unwrap();
        let peasant = manager.spawn(CharacterProfile::peasant().unwrap(), Vec2::new(200.0, 0.0)).unwrap();

        manager.update(&Held(vec![Direction::West]), NOWHERE, ms(0));

        assert_eq!(manager.get(ruler).unwrap().world_position(), Vec2::new(2.0, 0.0));
        assert_eq!(manager.get(peasant).unwrap().world_position(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_manager_selection_is_not_exclusive() {
        let mut manager = CharacterManager::new();
        manager.spawn(CharacterProfile::ruler().unwrap(), Vec2::new(0.0, 0.0)).unwrap();
        manager.spawn(CharacterProfile::peasant().unwrap(), Vec2::new(32.0, 32.0)).unwrap();

        manager.update(&NoInput, Vec2::new(40.0, 40.0), ms(0));
        assert_eq!(manager.selected().count(), 2);
    }

    #[test]
    fn test_manager_draw_culls_offscreen() {
        let mut manager = CharacterManager::new();
        manager.spawn(CharacterProfile::ruler().unwrap(), Vec2::new(10.0, 10.0)).unwrap();
        manager.spawn(CharacterProfile::peasant().unwrap(), Vec2::new(5000.0, 10.0)).unwrap();

        let camera = Camera::new(Vec2::ZERO, 800.0, 600.0);
        let mut renderer = RecordingRenderer::default();
        manager.draw(&camera, &mut renderer);

        assert_eq!(renderer.sprites.len(), 1);
        assert_eq!(renderer.sprites[0].sheet, RULER_SHEET);
        assert_ne!(renderer.sprites[0].sheet, PEASANT_SHEET);
    }

    #[test]
    fn test_manager_remove() {
        let mut manager = CharacterManager::new();
        let id = manager.spawn(CharacterProfile::peasant().unwrap(), Vec2::ZERO).unwrap();

        assert!(manager.remove(id).is_some());
        assert!(manager.remove(id).is_none());
        assert_eq!(manager.count(), 0);
    }
}
