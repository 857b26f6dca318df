//! One-step simulation of the snake, the fruit and the score.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::fruit::{Fruit, FruitSpawn};
use crate::grid::{Board, Cell};
use crate::palette::Hsl;
use crate::snake::{Direction, Snake};

/// Outcome of a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Continuing,
    Over { score: u32 },
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        matches!(self, GameResult::Over { .. })
    }
}

/// Something that happened during the last tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Consumed { score: u32 },
    FruitMoved { to: Cell },
}

/// Everything the renderer and scorekeeper read after a tick.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: Snake,
    fruit: Fruit,
    direction: Direction,
    score: u32,
    background: Option<Hsl>,
    result: GameResult,
    events: Vec<TickEvent>,
}

impl GameState {
    /// A state with explicit entities; score zero, game running.
    pub fn with_entities(board: Board, snake: Snake, direction: Direction, fruit: Fruit) -> Self {
        GameState {
            board,
            snake,
            fruit,
            direction,
            score: 0,
            background: None,
            result: GameResult::Continuing,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    /// Direction latched at the start of the last tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// `None` until the first fruit has been eaten.
    pub fn background(&self) -> Option<Hsl> {
        self.background
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn events(&self) -> &[TickEvent] {
        &self.events
    }
}

/// Owns the game state and the random source, and advances both one tick at
/// a time.
pub struct TickEngine<R = Pcg32> {
    state: GameState,
    spawn: FruitSpawn,
    rng: R,
}

impl<R: Rng> TickEngine<R> {
    /// A fresh game: one-cell snake in the centre heading right, random fruit.
    pub fn new(board: Board, spawn: FruitSpawn, mut rng: R) -> Self {
        let snake = Snake::new(board.center());
        let fruit = Fruit::spawn(board, &snake, spawn, &mut rng);
        let state = GameState::with_entities(board, snake, Direction::Right, fruit);
        TickEngine { state, spawn, rng }
    }

    pub fn from_state(state: GameState, spawn: FruitSpawn, rng: R) -> Self {
        TickEngine { state, spawn, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts over on the same board, keeping the random stream.
    pub fn restart(&mut self) {
        let board = self.state.board;
        let snake = Snake::new(board.center());
        let fruit = Fruit::spawn(board, &snake, self.spawn, &mut self.rng);
        self.state = GameState::with_entities(board, snake, Direction::Right, fruit);
    }

    /// Advances the game by one tick using `pending` as the new heading.
    ///
    /// Once the game is over this is a no-op that keeps returning the final
    /// result.
    pub fn step(&mut self, pending: Direction) -> GameResult {
        if self.state.result.is_over() {
            return self.state.result;
        }

        let board = self.state.board;
        let state = &mut self.state;
        state.events.clear();
        state.direction = pending;

        let new_head = state.snake.advance(state.direction, board);

        if new_head == state.fruit.cell() {
            state.score += 1;
            state.background = Some(Hsl::random_pastel(&mut self.rng));
            state.fruit = Fruit::spawn(board, &state.snake, self.spawn, &mut self.rng);
            state.events.push(TickEvent::Consumed { score: state.score });
            log::debug!(
                "ate fruit at ({}, {}), score {}, length {}",
                new_head.x,
                new_head.y,
                state.score,
                state.snake.len()
            );
        } else {
            state.snake.drop_tail();
        }

        if let Some(to) = state.fruit.tick(board) {
            state.events.push(TickEvent::FruitMoved { to });
            log::debug!("fruit moved to ({}, {})", to.x, to.y);
        }

        if state.snake.is_self_colliding() {
            state.result = GameResult::Over { score: state.score };
            log::info!("game over, final score {}", state.score);
        }

        state.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fruit::{FRUIT_GLYPHS, FRUIT_MOVE_PERIOD};
    use crate::snake::Direction::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0xC0FFEE)
    }

    fn engine(tiles: i64, cells: Vec<(u16, u16)>, dir: Direction, fruit: (u16, u16)) -> TickEngine {
        let board = Board::new(tiles).unwrap();
        let snake = Snake::from_cells(cells.into_iter().map(Cell::from)).unwrap();
        let fruit = Fruit::new(fruit.into(), Up, FRUIT_GLYPHS[0]);
        let state = GameState::with_entities(board, snake, dir, fruit);
        TickEngine::from_state(state, FruitSpawn::Anywhere, rng())
    }

    fn cells(state: &GameState) -> Vec<Cell> {
        state.snake().body().iter().copied().collect()
    }

    #[test]
    fn new_game_starts_centred() {
        let board = Board::new(20).unwrap();
        let engine = TickEngine::new(board, FruitSpawn::Anywhere, rng());
        assert_eq!(cells(engine.state()), vec![Cell::new(10, 10)]);
        assert_eq!(engine.state().direction(), Right);
        assert_eq!(engine.state().score(), 0);
        assert_eq!(engine.state().result(), GameResult::Continuing);
        assert!(board.contains(engine.state().fruit().cell()));
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut engine = engine(20, vec![(10, 10)], Right, (11, 10));
        assert_eq!(engine.step(Right), GameResult::Continuing);

        let state = engine.state();
        assert_eq!(state.snake().head(), Cell::new(11, 10));
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.score(), 1);
        assert!(state.background().is_some());
        assert_eq!(state.events(), &[TickEvent::Consumed { score: 1 }]);
        // Regenerated fruit has its phase bumped by this same tick.
        assert_eq!(state.fruit().phase(), 1);
    }

    #[test]
    fn head_wraps_off_right_edge() {
        let mut engine = engine(20, vec![(19, 10)], Right, (0, 0));
        assert_eq!(engine.step(Right), GameResult::Continuing);
        assert_eq!(cells(engine.state()), vec![Cell::new(0, 10)]);
    }

    #[test]
    fn moving_keeps_length() {
        let mut engine = engine(20, vec![(5, 5), (4, 5), (3, 5)], Right, (0, 0));
        engine.step(Down);
        assert_eq!(cells(engine.state()), vec![Cell::new(5, 6), Cell::new(5, 5), Cell::new(4, 5)]);
        assert_eq!(engine.state().direction(), Down);
    }

    #[test]
    fn body_collision_ends_game() {
        // Heading up from (5,5) lands on (5,4), which stays occupied after the tail drops.
        let mut engine = engine(
            20,
            vec![(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
            Left,
            (0, 0),
        );
        assert_eq!(engine.step(Up), GameResult::Over { score: 0 });
        assert!(engine.state().result().is_over());
    }

    #[test]
    fn head_duplicating_body_cell_reports_over() {
        // Stepping right yields [(5,5),(4,5),(5,5)].
        let mut engine = engine(20, vec![(4, 5), (5, 5), (5, 6)], Right, (0, 0));
        assert_eq!(engine.step(Right), GameResult::Over { score: 0 });
        assert_eq!(
            cells(engine.state()),
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(5, 5)]
        );
    }

    #[test]
    fn over_is_terminal() {
        let mut engine = engine(20, vec![(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)], Left, (0, 0));
        let over = engine.step(Up);
        let snapshot = cells(engine.state());
        let fruit = engine.state().fruit().clone();
        for dir in Direction::ALL {
            assert_eq!(engine.step(dir), over);
        }
        assert_eq!(cells(engine.state()), snapshot);
        assert_eq!(engine.state().fruit(), &fruit);
    }

    #[test]
    fn fruit_moves_once_per_period() {
        let mut engine = engine(20, vec![(0, 0)], Right, (10, 15));
        let mut moves = 0;
        for tick in 1..=FRUIT_MOVE_PERIOD * 3 {
            engine.step(Right);
            let moved = engine
                .state()
                .events()
                .iter()
                .any(|e| matches!(e, TickEvent::FruitMoved { .. }));
            assert_eq!(moved, tick % FRUIT_MOVE_PERIOD == 0, "tick {}", tick);
            if moved {
                moves += 1;
            }
        }
        assert_eq!(moves, 3);
        assert_eq!(engine.state().fruit().cell(), Cell::new(10, 12));
    }

    #[test]
    fn restart_resets_everything() {
        let mut engine = engine(20, vec![(10, 10)], Right, (11, 10));
        engine.step(Right);
        engine.restart();
        let state = engine.state();
        assert_eq!(cells(state), vec![Cell::new(10, 10)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.background(), None);
        assert_eq!(state.result(), GameResult::Continuing);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Up), Just(Down), Just(Left), Just(Right)]
    }

    proptest! {
        #[test]
        fn invariants_hold_over_random_play(
            seed in any::<u64>(),
            tiles in 3i64..12,
            spawn_free in any::<bool>(),
            moves in prop::collection::vec(direction(), 1..200),
        ) {
            let board = Board::new(tiles).unwrap();
            let spawn = if spawn_free { FruitSpawn::AvoidSnake } else { FruitSpawn::Anywhere };
            let mut engine = TickEngine::new(board, spawn, Pcg32::seed_from_u64(seed));

            for dir in moves {
                let before_len = engine.state().snake().len();
                let before_score = engine.state().score();
                let result = engine.step(dir);
                let state = engine.state();

                let ate = state.events().iter().any(|e| matches!(e, TickEvent::Consumed { .. }));
                prop_assert!(state.score() >= before_score);
                if ate {
                    prop_assert_eq!(state.score(), before_score + 1);
                    prop_assert_eq!(state.snake().len(), before_len + 1);
                } else {
                    prop_assert_eq!(state.score(), before_score);
                    prop_assert_eq!(state.snake().len(), before_len);
                }

                prop_assert!(state.snake().body().iter().all(|c| board.contains(*c)));
                prop_assert!(board.contains(state.fruit().cell()));

                if result.is_over() {
                    prop_assert!(state.snake().is_self_colliding());
                    break;
                }
            }
        }
    }
}
