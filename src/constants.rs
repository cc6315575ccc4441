// DOM hooks the page provides.

// Element holding the gallery; the canvas is appended here and its size is
// the viewport.
pub const CONTAINER_SELECTOR: &str = "#container";

// Images inside the container that become meshes (override with
// `data-image-selector` on the container).
pub const DEFAULT_IMAGE_SELECTOR: &str = "img";

// Optional content wrapper moved by the smoothed scroll offset.
pub const CONTENT_SELECTOR: &str = "[data-scroll-content]";
