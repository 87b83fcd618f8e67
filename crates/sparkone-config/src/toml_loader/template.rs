//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# SparkOne Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# base_url = "http://127.0.0.1:5000"   # or set SPARKONE_BASE_URL
# path = "/v1/chat/completions"
# mode = "instruct"
# instruction_template = "Alpaca"
# connect_timeout_secs = 10            # 1-120
# read_timeout_secs = 30               # 1-600
# request_timeout_secs = 60            # 1-600

[probe]
# host = ""              # empty = host of endpoint.base_url
# port = 0               # 0 = port of endpoint.base_url
# timeout_secs = 5       # 1-60
# interval_secs = 30     # 5-3600

[speech]
# enabled = true
# command = "espeak"     # empty = log replies only
# args = ["-s", "160"]

[session]
# persist = true
# snapshot_path = "/path/to/session.json"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
