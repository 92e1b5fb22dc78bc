/// Collision detection for the platformer
///
/// Everything in the world is an axis-aligned box in world pixels. This
/// module holds the box type, the intersection test, and helpers that run a
/// box against a collection and report matching indices in collection order.
///
/// Callers resolve collisions in two phases: collect indices first
/// (immutable borrow), then mutate. That keeps iteration order stable and
/// avoids removing from a `Vec` while walking it.

/// Axis-aligned bounding box with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Returns a copy moved by the given offset
    pub fn translated(&self, dx: f32, dy: f32) -> Aabb {
        Aabb::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Anything with a world-space bounding box.
pub trait Collidable {
    fn get_bounds(&self) -> Aabb;
}

impl Collidable for Aabb {
    fn get_bounds(&self) -> Aabb {
        *self
    }
}

/// Checks if two boxes overlap.
///
/// Upper bounds are exclusive: boxes that only share an edge do not
/// intersect. This is what lets an entity rest exactly on a platform top
/// without colliding with it again next frame.
pub fn aabb_intersect(a: &Aabb, b: &Aabb) -> bool {
    let x_overlap = a.left() < b.right() && a.right() > b.left();
    let y_overlap = a.top() < b.bottom() && a.bottom() > b.top();

    x_overlap && y_overlap
}

/// Indices of every entity in `entities` overlapping `entity`, in order.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        let other_bounds = other.get_bounds();

        if aabb_intersect(&entity_bounds, &other_bounds) {
            collisions.push(index);
        }
    }

    collisions
}

/// Index of the first entity overlapping `bounds`, if any.
pub fn first_collision<T: Collidable>(bounds: &Aabb, entities: &[T]) -> Option<usize> {
    entities
        .iter()
        .position(|other| aabb_intersect(bounds, &other.get_bounds()))
}
