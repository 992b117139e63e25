pub mod uniforms;
