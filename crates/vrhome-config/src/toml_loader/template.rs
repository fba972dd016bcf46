//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# VR Home Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "forest"          # forest, midnight, or a path to a theme YAML

[display]
# vrmono = false         # force a single 1024x1024 mono view
# mono_width = 1024      # 64-8192
# mono_height = 1024     # 64-8192
# fov_degrees = 90.0     # 30-150
# near = 0.01
# far = 1000.0
# antialias = false

[cache]
# enabled = true         # share textures between identical requests

[assets]
# root = "assets"
# refresh_icon = "refresh.png"

[navigation]
# base_url = "https://example.com/vr/home/"   # resolves ../relative sample URLs

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR

# Panels replace the built-in set when any are listed.
# [[panels]]
# title = "Starter Kit"
# show_refresh_button = true
# initial_rotation = 0.0
#
# [[panels.samples]]
# text = "Hello WebVR"
# url = "../WebVRSamples/HelloWebVR/index.html"
# description = "Intro to the basics of WebVR"
"##
    .to_string()
}
