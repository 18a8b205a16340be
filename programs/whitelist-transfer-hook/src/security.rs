use solana_security_txt::security_txt;

security_txt! {
    name: "Whitelist Transfer Hook program",
    project_url: "https://github.com/whitelist-labs/whitelist-transfer-hook",
    contacts: "security@whitelist-labs.dev",
    policy: "https://github.com/whitelist-labs/whitelist-transfer-hook/blob/main/SECURITY.md",
    source_code: "https://github.com/whitelist-labs/whitelist-transfer-hook"
}
