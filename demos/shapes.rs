//! Headless drawing demo.
//!
//! The input thread turns key presses and clicks into commands and pushes them without waiting.
//! The render thread drains the queue once per frame and applies every command to its scene.

use cmdring::{
    command::{Command, CreateData, MoveData, RemoveData, Shape},
    traits::*,
    HeapCons, HeapProd, HeapRb,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

const FRAME: Duration = Duration::from_millis(16);

fn init_logging() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cmdring=trace")),
        )
        .with_thread_names(true)
        .init();
}

#[derive(Clone, Copy, Debug)]
enum Key {
    C,
    R,
    T,
    Delete,
    Escape,
}

#[derive(Clone, Copy, Debug)]
enum Event {
    Key(Key),
    Click { x: f32, y: f32 },
    Drag { id: u32, x: f32, y: f32 },
}

/// Producer side: keeps the selected shape and turns events into commands.
struct InputHandler {
    active: Shape,
    prod: HeapProd<Command>,
    dropped: usize,
}

impl InputHandler {
    fn new(prod: HeapProd<Command>) -> Self {
        Self {
            active: Shape::Circle,
            prod,
            dropped: 0,
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Key(Key::C) => self.active = Shape::Circle,
            Event::Key(Key::R) => self.active = Shape::Rectangle,
            Event::Key(Key::T) => self.active = Shape::Triangle,
            Event::Key(Key::Delete) => self.send(Command::Clear),
            Event::Key(Key::Escape) => return false,
            Event::Click { x, y } => self.send(Command::create(self.active, x, y)),
            Event::Drag { id, x, y } => self.send(Command::MoveShape(MoveData { id, x, y })),
        }
        true
    }

    fn send(&mut self, cmd: Command) {
        // Input must stay responsive, so a full queue drops the command.
        if !self.prod.push(cmd) {
            self.dropped += 1;
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ShapeInstance {
    id: u32,
    shape: Shape,
    x: f32,
    y: f32,
    size: f32,
}

/// Consumer side state.
#[derive(Default)]
struct Scene {
    shapes: Vec<ShapeInstance>,
    next_id: u32,
}

impl Scene {
    fn apply(&mut self, cmd: &Command) {
        match *cmd {
            Command::CreateShape(CreateData { shape, x, y, size }) => {
                self.shapes.push(ShapeInstance {
                    id: self.next_id,
                    shape,
                    x,
                    y,
                    size,
                });
                self.next_id += 1;
            }
            Command::MoveShape(MoveData { id, x, y }) => {
                if let Some(s) = self.shapes.iter_mut().find(|s| s.id == id) {
                    s.x = x;
                    s.y = y;
                }
            }
            Command::DeleteShape(RemoveData { id }) => {
                if let Some(pos) = self.shapes.iter().position(|s| s.id == id) {
                    self.shapes.swap_remove(pos);
                }
            }
            Command::Clear => self.shapes.clear(),
            // Hit testing belongs to a real window backend.
            Command::ClickAt(_) => (),
        }
    }
}

struct RenderEngine {
    cons: HeapCons<Command>,
    scene: Scene,
    frames: usize,
}

impl RenderEngine {
    /// Applies everything queued so far and "draws" the scene.
    fn frame(&mut self) -> usize {
        let mut applied = 0;
        while let Some(cmd) = self.cons.front() {
            self.scene.apply(cmd);
            self.cons.pop();
            applied += 1;
        }
        self.frames += 1;
        applied
    }
}

fn main() {
    init_logging();

    let rb = HeapRb::<Command>::new(64);
    let (prod, cons) = rb.split();
    let done = Arc::new(AtomicBool::new(false));

    let render = thread::Builder::new()
        .name("render".into())
        .spawn({
            let done = done.clone();
            move || {
                let mut engine = RenderEngine {
                    cons,
                    scene: Scene::default(),
                    frames: 0,
                };
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let applied = engine.frame();
                    if applied != 0 {
                        println!("<- frame {}: applied {} commands", engine.frames, applied);
                    }
                    if finished {
                        break engine.scene;
                    }
                    thread::sleep(FRAME);
                }
            }
        })
        .unwrap();

    let script = [
        Event::Click { x: 100.0, y: 100.0 },
        Event::Key(Key::R),
        Event::Click { x: 200.0, y: 150.0 },
        Event::Key(Key::T),
        Event::Click { x: 300.0, y: 200.0 },
        Event::Drag { id: 0, x: 120.0, y: 90.0 },
        Event::Key(Key::Delete),
        Event::Key(Key::C),
        Event::Click { x: 400.0, y: 300.0 },
        Event::Key(Key::R),
        Event::Click { x: 50.0, y: 60.0 },
        Event::Key(Key::Escape),
    ];

    let mut input = InputHandler::new(prod);
    for event in script {
        println!("-> {:?}", event);
        if !input.handle(event) {
            break;
        }
        thread::sleep(FRAME / 3);
    }
    done.store(true, Ordering::Release);

    let scene = render.join().unwrap();
    println!("dropped commands: {}", input.dropped);
    for s in &scene.shapes {
        println!("{:?} #{} at ({}, {}) size {}", s.shape, s.id, s.x, s.y, s.size);
    }
    assert_eq!(input.dropped, 0);
    assert_eq!(scene.shapes.len(), 2);
}
